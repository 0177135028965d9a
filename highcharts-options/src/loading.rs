use highcharts_script::{Format, Number};

options! {
    /// The loading screen shown while chart data is being fetched or
    /// updated, controlled with chart.showLoading() in the browser.
    pub struct Loading {
        /// The duration in milliseconds of the fade out of the loading
        /// screen. Default: 100
        hide_duration: Number => "hideDuration",
        /// CSS styles for the loading label span.
        /// Default: { "fontWeight": "bold", "position": "relative", "top": "1em" }
        label_style: String => "labelStyle" as Format::Templated("{ {} }"),
        /// The duration in milliseconds of the fade in of the loading
        /// screen. Default: 100
        show_duration: Number => "showDuration",
        /// CSS styles for the loading screen that covers the plot area.
        /// Default: { "position": "absolute", "backgroundColor": "white", "opacity": 0.5, "textAlign": "center" }
        style: String => "style" as Format::Templated("{ {} }"),
    }
}

use highcharts_script::Number;

options! {
    /// Global options that apply to all charts on the page, set through
    /// `Highcharts.setOptions`.
    pub struct Global {
        /// The URL to the additional file to lazy load for Android 2.x
        /// devices, which lack SVG support.
        /// Default: http://code.highcharts.com/{version}/modules/canvas-tools.js
        canvas_tools_url: String => "canvasToolsURL",
        /// The timezone offset in minutes positive west of UTC, matching
        /// JavaScript's getTimezoneOffset. Default: 0
        timezone_offset: Number => "timezoneOffset",
        /// Whether to use UTC time for axis scaling, tickmark placement
        /// and time display. Default: true
        use_utc: bool => "useUTC",
        /// The URL to the pattern image required by VML browsers to draw
        /// radial gradients.
        /// Default: http://code.highcharts.com/{version}/gfx/vml-radial-gradient.png
        vml_radial_gradient_url: String => "VMLRadialGradientURL",
    }
}

options! {
    /// Language strings, set through `Highcharts.setOptions` and shared
    /// by all charts on the page.
    pub struct Lang {
        /// The default decimal point used when formatting numbers.
        /// Default: .
        decimal_point: String => "decimalPoint",
        /// The text shown when a date is invalid. Default: Invalid date
        invalid_date: String => "invalidDate",
        /// The loading text shown while data is loading. Default: Loading...
        loading: String => "loading",
        /// The full month names, used for datetime labels.
        months: Vec<String> => "months",
        /// Metric prefixes used to shorten high numbers in axis labels.
        /// Default: ["k", "M", "G", "T", "P", "E"]
        numeric_symbols: Vec<String> => "numericSymbols",
        /// The text of the button appearing when the chart is zoomed.
        /// Default: Reset zoom
        reset_zoom: String => "resetZoom",
        /// The tooltip title of the reset zoom button.
        /// Default: Reset zoom level 1:1
        reset_zoom_title: String => "resetZoomTitle",
        /// The abbreviated month names, used for datetime labels.
        short_months: Vec<String> => "shortMonths",
        /// The default thousands separator used when formatting numbers.
        /// Default: ,
        thousands_sep: String => "thousandsSep",
        /// The weekday names, starting with Sunday.
        weekdays: Vec<String> => "weekdays",
    }
}

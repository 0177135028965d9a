use highcharts_script::{Format, Number};

use crate::enums::{HorizontalAlign, VerticalAlign};

options! {
    /// The chart's main title.
    pub struct Title {
        /// The horizontal alignment of the title. Default: center
        align: HorizontalAlign => "align",
        /// When the title is floating, the plot area will not move to make
        /// space for it. Default: false
        floating: bool => "floating",
        /// The margin between the title and the plot area, or if a
        /// subtitle is present, between the title and the subtitle.
        /// Default: 15
        margin: Number => "margin",
        /// CSS styles for the title.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The title of the chart. Default: Chart title
        text: String => "text",
        /// Whether to use HTML to render the text. Default: false
        use_html: bool => "useHTML",
        /// The vertical alignment of the title. Default: top
        vertical_align: VerticalAlign => "verticalAlign",
        /// The x position of the title relative to the alignment. Default: 0
        x: Number => "x",
        /// The y position of the title relative to the alignment. Default: 15
        y: Number => "y",
    }
}

options! {
    /// The chart's subtitle, shown below the title.
    pub struct Subtitle {
        /// The horizontal alignment of the subtitle. Default: center
        align: HorizontalAlign => "align",
        /// When the subtitle is floating, the plot area will not move to
        /// make space for it. Default: false
        floating: bool => "floating",
        /// CSS styles for the subtitle.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The subtitle of the chart.
        text: String => "text",
        /// Whether to use HTML to render the text. Default: false
        use_html: bool => "useHTML",
        /// The vertical alignment of the subtitle. Default: top
        vertical_align: VerticalAlign => "verticalAlign",
        /// The x position of the subtitle relative to the alignment. Default: 0
        x: Number => "x",
        /// The y position of the subtitle relative to the alignment. Default: 30
        y: Number => "y",
    }
}

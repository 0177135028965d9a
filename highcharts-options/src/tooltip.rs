use highcharts_script::{Color, Format, JsFunction, Number};

use crate::helpers::{BackColor, Shadow};

options! {
    /// Date format strings, one per time resolution, used for datetime
    /// axis labels and tooltip headers.
    pub struct DateTimeLabelFormats {
        millisecond: String => "millisecond",
        second: String => "second",
        minute: String => "minute",
        hour: String => "hour",
        day: String => "day",
        week: String => "week",
        month: String => "month",
        year: String => "year",
    }
}

options! {
    /// Options for the tooltip that appears when the user hovers over a
    /// series or point.
    pub struct Tooltip {
        /// Enable or disable animation of the tooltip. Default: true
        animation: bool => "animation",
        /// The background color or gradient for the tooltip.
        /// Default: rgba(255, 255, 255, .85)
        background_color: BackColor => "backgroundColor",
        /// The color of the tooltip border. When null, the border takes
        /// the color of the corresponding series or point. Default: null
        border_color: Color => "borderColor",
        /// The radius of the rounded border corners. Default: 3
        border_radius: Number => "borderRadius",
        /// The pixel width of the tooltip border. Default: 1
        border_width: Number => "borderWidth",
        /// For series on a datetime axis, the date format in the tooltip's
        /// header will by default adapt to the pointInterval; these
        /// formats override that.
        date_time_label_formats: DateTimeLabelFormats => "dateTimeLabelFormats",
        /// Enable or disable the tooltip. Default: true
        enabled: bool => "enabled",
        /// Whether the tooltip should follow the mouse as it moves across
        /// columns, pie slices and other point types with an extent.
        /// Default: false
        follow_pointer: bool => "followPointer",
        /// A string to append to the tooltip format. Default: false
        footer_format: String => "footerFormat",
        /// Callback function to format the text of the tooltip. A subset
        /// of HTML is supported, unless useHTML is true.
        formatter: JsFunction => "formatter",
        /// The HTML of the tooltip header line.
        header_format: String => "headerFormat",
        /// The HTML of the point's line in the tooltip.
        point_format: String => "pointFormat",
        /// A callback function to place the tooltip in a fixed position.
        positioner: JsFunction => "positioner",
        /// Whether to apply a drop shadow to the tooltip. Default: true
        shadow: Shadow => "shadow",
        /// When the tooltip is shared, the entire plot area captures mouse
        /// movement and all points of the hovered x value are shown.
        /// Default: false
        shared: bool => "shared",
        /// Proximity snap for graphs or single points. Default: 10/25
        snap: Number => "snap",
        /// CSS styles for the tooltip.
        style: String => "style" as Format::Templated("{ {} }"),
        /// Use HTML to render the contents of the tooltip instead of SVG.
        /// Default: false
        use_html: bool => "useHTML",
        /// How many decimals to show in each series' y value. Default: null
        value_decimals: Number => "valueDecimals",
        /// A string to prepend to each series' y value. Default: null
        value_prefix: String => "valuePrefix",
        /// A string to append to each series' y value. Default: null
        value_suffix: String => "valueSuffix",
        /// The format for the date in the tooltip header if the x axis is
        /// a datetime axis. Default: %A, %b %e, %Y
        x_date_format: String => "xDateFormat",
    }
}

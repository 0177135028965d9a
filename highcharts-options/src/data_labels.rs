use highcharts_script::{Color, Format, JsFunction, Number};

use crate::enums::{HorizontalAlign, Overflow, VerticalAlign};
use crate::helpers::{BackColor, Shadow};

options! {
    /// Labels drawn next to the data points, for all series types.
    ///
    /// The connector options only apply to pie slices, where the label is
    /// drawn outside the slice and connected to it.
    pub struct DataLabels {
        /// Alignment of the data label relative to the data point.
        /// Default: center
        align: HorizontalAlign => "align",
        /// The background color or gradient for the data label.
        background_color: BackColor => "backgroundColor",
        /// The border color for the data label. Default: undefined
        border_color: Color => "borderColor",
        /// The border radius in pixels for the data label. Default: 0
        border_radius: Number => "borderRadius",
        /// The border width in pixels for the data label. Default: 0
        border_width: Number => "borderWidth",
        /// The text color for the data labels. Default: null
        color: Color => "color",
        /// The color of the line connecting the data label to the pie
        /// slice. Defaults to the series' color.
        connector_color: Color => "connectorColor",
        /// The distance from the data label to the connector. Default: 5
        connector_padding: Number => "connectorPadding",
        /// The width of the line connecting the data label to the pie
        /// slice. Default: 1
        connector_width: Number => "connectorWidth",
        /// Whether to hide data labels that are outside the plot area.
        /// Default: true
        crop: bool => "crop",
        /// The distance of the data label from the pie's edge. Default: 30
        distance: Number => "distance",
        /// Enable or disable the data labels. Default: false
        enabled: bool => "enabled",
        /// Callback JavaScript function to format the data label.
        formatter: JsFunction => "formatter",
        /// How to handle data labels that flow outside the plot area.
        /// Default: justify
        overflow: Overflow => "overflow",
        /// When either the borderWidth or the backgroundColor is set,
        /// this is the padding within the box. Default: 2
        padding: Number => "padding",
        /// Text rotation in degrees. Default: 0
        rotation: Number => "rotation",
        /// Whether to apply a drop shadow to the data label. Default: false
        shadow: Shadow => "shadow",
        /// Whether to render the connector as a soft arc or a line with
        /// a sharp break. Default: true
        soft_connector: bool => "softConnector",
        /// CSS styles for the label.
        style: String => "style" as Format::Templated("{ {} }"),
        /// Whether to use HTML to render the labels. Default: false
        use_html: bool => "useHTML",
        /// Vertical alignment of the data label. Default: bottom
        vertical_align: VerticalAlign => "verticalAlign",
        /// The x position offset of the label relative to the point.
        /// Default: 0
        x: Number => "x",
        /// The y position offset of the label relative to the point.
        /// Default: -6
        y: Number => "y",
    }
}

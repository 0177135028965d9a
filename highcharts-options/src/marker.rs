use highcharts_script::{Color, Number};

options! {
    /// Marker appearance when a point is hovered.
    pub struct MarkerHoverState {
        /// Enable or disable the point marker in hover state. Default: true
        enabled: bool => "enabled",
        /// The fill color of the marker in hover state.
        fill_color: Color => "fillColor",
        /// The color of the point marker's outline in hover state.
        line_color: Color => "lineColor",
        /// The width of the point marker's outline in hover state.
        /// Default: 0
        line_width: Number => "lineWidth",
        /// The radius of the point marker in hover state. Defaults to the
        /// normal radius plus two.
        radius: Number => "radius",
    }
}

options! {
    /// Marker appearance when a point is selected.
    pub struct MarkerSelectState {
        /// Enable or disable the point marker in select state. Default: true
        enabled: bool => "enabled",
        /// The fill color of the marker in select state. Default: #FFFFFF
        fill_color: Color => "fillColor",
        /// The color of the point marker's outline in select state.
        /// Default: #000000
        line_color: Color => "lineColor",
        /// The width of the point marker's outline in select state.
        /// Default: 2
        line_width: Number => "lineWidth",
        /// The radius of the point marker in select state.
        radius: Number => "radius",
    }
}

options! {
    /// Interaction states for the point markers.
    pub struct MarkerStates {
        hover: MarkerHoverState => "hover",
        select: MarkerSelectState => "select",
    }
}

options! {
    /// Options for the point markers of line-like series.
    pub struct Marker {
        /// Enable or disable the point marker. Default: true
        enabled: bool => "enabled",
        /// The fill color of the point marker. When null, the series' or
        /// point's color is used. Default: null
        fill_color: Color => "fillColor",
        /// The color of the point marker's outline. Default: #FFFFFF
        line_color: Color => "lineColor",
        /// The width of the point marker's outline. Default: 0
        line_width: Number => "lineWidth",
        /// The radius of the point marker. Default: 4
        radius: Number => "radius",
        /// Interaction states for the point markers.
        states: MarkerStates => "states",
        /// A predefined shape or symbol for the marker, such as 'circle',
        /// 'square', 'diamond', 'triangle', 'triangle-down', or a
        /// `url(graphic.png)` reference.
        symbol: String => "symbol",
    }
}

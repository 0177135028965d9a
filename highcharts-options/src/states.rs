use highcharts_script::Number;

use crate::marker::Marker;

options! {
    /// Series appearance when it is hovered.
    pub struct HoverState {
        /// How much to brighten the point on interaction; used for
        /// column-like series. Default: 0.1
        brightness: Number => "brightness",
        /// Enable separate styles for the hovered series to visualize
        /// that the user hovers either the series itself or the legend.
        /// Default: true
        enabled: bool => "enabled",
        /// The width of the line connecting the data points. Default: 0
        line_width: Number => "lineWidth",
        /// Marker options for the hovered state.
        marker: Marker => "marker",
    }
}

options! {
    /// A wrapper object for all the series options in specific states.
    pub struct States {
        /// Options for the hovered series.
        hover: HoverState => "hover",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highcharts_script::OptionNode;

    #[test]
    fn test_hover_state_brace_wrapped_in_declared_order() {
        let hover = HoverState::new().enabled(true).line_width(0);
        assert_eq!(
            hover.to_object().to_script_text(),
            "{ enabled: true, lineWidth: 0 }"
        );
    }

    #[test]
    fn test_states_nest_under_hover() {
        let states = States::new().hover(HoverState::new().enabled(false));
        assert_eq!(
            states.to_object().to_script_text(),
            "{ hover: { enabled: false } }"
        );
    }
}

use highcharts_script::{Color, Number};

use crate::helpers::{BackColor, PercentageOrPixel};

options! {
    /// Background ring of a polar pane.
    pub struct PaneBackground {
        /// The background color or gradient.
        background_color: BackColor => "backgroundColor",
        /// The pane background border color.
        border_color: Color => "borderColor",
        /// The pixel border width of the pane background. Default: 1
        border_width: Number => "borderWidth",
        /// The inner radius of the pane background, as pixels or a
        /// percentage. Default: 0
        inner_radius: PercentageOrPixel => "innerRadius",
        /// The outer radius of the pane background, as pixels or a
        /// percentage. Default: 105%
        outer_radius: PercentageOrPixel => "outerRadius",
        /// The shape of the pane background, 'solid' or 'arc'.
        /// Default: solid
        shape: String => "shape",
    }
}

options! {
    /// Options for the polar pane, applying to polar charts and angular
    /// gauges.
    pub struct Pane {
        /// An array of background items for the pane.
        background: Vec<PaneBackground> => "background",
        /// The center of the pane relative to the plot area, as a pair
        /// of percentages or pixel positions. Default: ['50%', '50%']
        center: Vec<PercentageOrPixel> => "center",
        /// The end angle of the polar x axis or gauge value axis, in
        /// degrees where 0 is north. Defaults to startAngle plus 360.
        end_angle: Number => "endAngle",
        /// The size of the pane, as pixels or a percentage of the plot
        /// area. Default: 85%
        size: PercentageOrPixel => "size",
        /// The start angle of the polar x axis or gauge axis, in degrees
        /// where 0 is north. Default: 0
        start_angle: Number => "startAngle",
    }
}

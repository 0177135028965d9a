use highcharts_script::{Color, Number};

use crate::data_labels::DataLabels;
use crate::enums::Cursor;
use crate::events::SeriesEvents;
use crate::helpers::{Animation, PercentageOrPixel, Shadow};
use crate::plot_options::series::{SeriesPoint, SeriesTooltip};
use crate::states::States;

options! {
    /// Options for pie series. A pie always has one category axis worth
    /// of data, sliced into sectors.
    pub struct PlotOptionsPie {
        /// Allow the pie slices to be selected by clicking on them.
        /// Default: false
        allow_point_select: bool => "allowPointSelect",
        /// Enable or disable the initial animation, or set the animation
        /// parameters. Default: true
        animation: Animation => "animation",
        /// The color of the border surrounding each slice. Default: #FFFFFF
        border_color: Color => "borderColor",
        /// The width of the border surrounding each slice. Default: 1
        border_width: Number => "borderWidth",
        /// The center of the pie chart relative to the plot area, as a
        /// pair of percentages or pixel positions. Default: ['50%', '50%']
        center: Vec<PercentageOrPixel> => "center",
        /// The color of the pie series, normally left unset so the
        /// global colors color the slices.
        color: Color => "color",
        /// The cursor shown when hovering the series.
        cursor: Cursor => "cursor",
        /// Labels drawn next to the slices.
        data_labels: DataLabels => "dataLabels",
        /// Enable or disable mouse tracking for this series. Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// The end angle of the pie in degrees where 0 is top. Defaults
        /// to startAngle plus 360.
        end_angle: Number => "endAngle",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// Whether to exclude hidden points from the computed total,
        /// re-laying the pie out when a slice is hidden. Default: false
        ignore_hidden_point: bool => "ignoreHiddenPoint",
        /// The size of the inner diameter for the pie, making it a donut.
        /// A percentage is relative to the pie size, a number gives inner
        /// pixels. Default: 0
        inner_size: PercentageOrPixel => "innerSize",
        /// The id of another series to link to. Default: null
        linked_to: String => "linkedTo",
        /// Properties for each single point.
        point: SeriesPoint => "point",
        /// Whether to select the series initially. Default: false
        selected: bool => "selected",
        /// Whether to apply a drop shadow to the slices. Default: false
        shadow: Shadow => "shadow",
        /// Whether to display this series in the legend. Default: false
        show_in_legend: bool => "showInLegend",
        /// The diameter of the pie relative to the plot area or in
        /// pixels. Default: 75%
        size: PercentageOrPixel => "size",
        /// If a point is sliced, how far it is separated from the center,
        /// in pixels. Default: 10
        sliced_offset: Number => "slicedOffset",
        /// The start angle of the pie slices in degrees where 0 is top.
        /// Default: 0
        start_angle: Number => "startAngle",
        /// Series options in specific interaction states.
        states: States => "states",
        /// Sticky tracking of mouse events. Default: false
        sticky_tracking: bool => "stickyTracking",
        /// Tooltip overrides for this series.
        tooltip: SeriesTooltip => "tooltip",
        /// Set the initial visibility of the series. Default: true
        visible: bool => "visible",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highcharts_script::OptionNode;

    #[test]
    fn test_pie_sizes_keep_their_unit() {
        let pie = PlotOptionsPie::new()
            .center(vec![
                PercentageOrPixel::percent(50),
                PercentageOrPixel::pixels(120),
            ])
            .inner_size(PercentageOrPixel::percent(40))
            .size(110);
        assert_eq!(
            pie.to_object().to_script_text(),
            "{ center: ['50%', 120], innerSize: '40%', size: 110 }"
        );
    }
}

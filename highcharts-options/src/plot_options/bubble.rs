use highcharts_script::{Color, Number};

use crate::data_labels::DataLabels;
use crate::enums::{Cursor, DashStyle, Placement, PointIntervalUnit, SizeBy};
use crate::events::SeriesEvents;
use crate::helpers::{Animation, PercentageOrPixel, PointStart, Shadow};
use crate::marker::Marker;
use crate::plot_options::series::{SeriesPoint, SeriesTooltip};
use crate::states::States;

options! {
    /// Options for bubble series, a scatter variant where a third
    /// dimension controls the marker size.
    pub struct PlotOptionsBubble {
        /// Allow this series' points to be selected by clicking on the
        /// bubbles. Default: false
        allow_point_select: bool => "allowPointSelect",
        /// Enable or disable the initial animation, or set the animation
        /// parameters. Default: true
        animation: Animation => "animation",
        /// The main color of the series.
        color: Color => "color",
        /// When the series contains less points than the crop threshold,
        /// all points are drawn even if outside the visible plot area.
        /// Default: 300
        crop_threshold: Number => "cropThreshold",
        /// The cursor shown when hovering the series.
        cursor: Cursor => "cursor",
        /// A name for the dash style to use, should a line between the
        /// bubbles be drawn. Default: Solid
        dash_style: DashStyle => "dashStyle",
        /// Labels drawn next to the data points.
        data_labels: DataLabels => "dataLabels",
        /// Whether to display negative sized bubbles. The threshold also
        /// decides what is negative. Default: true
        display_negative: bool => "displayNegative",
        /// Enable or disable mouse tracking for this series. Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// The width of the line connecting the data points. Default: 0
        line_width: Number => "lineWidth",
        /// The id of another series to link to. Default: null
        linked_to: String => "linkedTo",
        /// Options for the bubble markers.
        marker: Marker => "marker",
        /// Maximum bubble size, as pixels or a percentage of the smaller
        /// chart dimension. Default: 20%
        max_size: PercentageOrPixel => "maxSize",
        /// Minimum bubble size, as pixels or a percentage of the smaller
        /// chart dimension. Default: 8
        min_size: PercentageOrPixel => "minSize",
        /// The color of the bubbles below the zThreshold. Default: null
        negative_color: Color => "negativeColor",
        /// Properties for each single point.
        point: SeriesPoint => "point",
        /// The interval of implicit x values. Default: 1
        point_interval: Number => "pointInterval",
        /// Irregular time unit for the point interval on datetime series.
        point_interval_unit: PointIntervalUnit => "pointIntervalUnit",
        /// Point placement on a categorized x axis. Default: null
        point_placement: Placement => "pointPlacement",
        /// The x value the implicit point sequence starts on. Default: 0
        point_start: PointStart => "pointStart",
        /// Whether to select the series initially. Default: false
        selected: bool => "selected",
        /// Whether to apply a drop shadow to the bubbles. Default: false
        shadow: Shadow => "shadow",
        /// Display a checkbox next to the legend item when selectable.
        /// Default: false
        show_checkbox: bool => "showCheckbox",
        /// Whether to show this series in the legend. Default: true
        show_in_legend: bool => "showInLegend",
        /// Whether the bubble's value is represented by the area or the
        /// width of the bubble. Default: area
        size_by: SizeBy => "sizeBy",
        /// Series options in specific interaction states.
        states: States => "states",
        /// Sticky tracking of mouse events. Default: false
        sticky_tracking: bool => "stickyTracking",
        /// Tooltip overrides for this series.
        tooltip: SeriesTooltip => "tooltip",
        /// Data length above which only flat arrays are allowed.
        /// Default: 1000
        turbo_threshold: Number => "turboThreshold",
        /// Set the initial visibility of the series. Default: true
        visible: bool => "visible",
        /// The maximum z value for the bubble sizing. Defaults to the
        /// highest z value in the data.
        z_max: Number => "zMax",
        /// The minimum z value for the bubble sizing. Defaults to the
        /// lowest z value in the data.
        z_min: Number => "zMin",
        /// When displayNegative is false, bubbles with a z value below
        /// this are skipped; when negativeColor is set, values below this
        /// are colored with it. Default: 0
        z_threshold: Number => "zThreshold",
    }
}

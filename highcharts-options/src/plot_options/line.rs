use highcharts_script::{Color, Number};

use crate::data_labels::DataLabels;
use crate::enums::{Cursor, DashStyle, Placement, PointIntervalUnit, Stacking};
use crate::events::SeriesEvents;
use crate::helpers::{Animation, PointStart, Shadow};
use crate::marker::Marker;
use crate::plot_options::series::{SeriesPoint, SeriesTooltip};
use crate::states::States;

options! {
    /// Options for line series.
    pub struct PlotOptionsLine {
        /// Allow this series' points to be selected by clicking on the
        /// markers. Default: false
        allow_point_select: bool => "allowPointSelect",
        /// Enable or disable the initial animation, or set the animation
        /// parameters. Default: true
        animation: Animation => "animation",
        /// The main color of the series. Applies to the line and the
        /// point markers unless otherwise specified.
        color: Color => "color",
        /// Polar charts only. Whether to connect the ends of the line
        /// across the extremes. Default: true
        connect_ends: bool => "connectEnds",
        /// Whether to connect a graph line across null points.
        /// Default: false
        connect_nulls: bool => "connectNulls",
        /// When the series contains less points than the crop threshold,
        /// all points are drawn even if outside the visible plot area.
        /// Default: 300
        crop_threshold: Number => "cropThreshold",
        /// The cursor shown when hovering the series.
        cursor: Cursor => "cursor",
        /// A name for the dash style to use for the graph. Default: Solid
        dash_style: DashStyle => "dashStyle",
        /// Labels drawn next to the data points.
        data_labels: DataLabels => "dataLabels",
        /// Enable or disable mouse tracking for this series. Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// Pixel width of the graph line. Default: 2
        line_width: Number => "lineWidth",
        /// The id of another series to link to. Default: null
        linked_to: String => "linkedTo",
        /// Options for the point markers.
        marker: Marker => "marker",
        /// The color for the parts of the graph below the threshold.
        /// Default: null
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
        /// Whether to apply a drop shadow to the graph line. Default: false
        shadow: Shadow => "shadow",
        /// Display a checkbox next to the legend item when selectable.
        /// Default: false
        show_checkbox: bool => "showCheckbox",
        /// Whether to show this series in the legend. Default: true
        show_in_legend: bool => "showInLegend",
        /// Whether to stack the values of each series. Default: null
        stacking: Stacking => "stacking",
        /// Series options in specific interaction states.
        states: States => "states",
        /// Whether to draw each point as a step, keeping the y value
        /// until the next point. Default: false
        step: bool => "step",
        /// Sticky tracking of mouse events. Default: true
        sticky_tracking: bool => "stickyTracking",
        /// The zero level for the series. Default: 0
        threshold: Number => "threshold",
        /// Tooltip overrides for this series.
        tooltip: SeriesTooltip => "tooltip",
        /// Data length above which only flat arrays are allowed.
        /// Default: 1000
        turbo_threshold: Number => "turboThreshold",
        /// Set the initial visibility of the series. Default: true
        visible: bool => "visible",
    }
}

use highcharts_script::{Color, Number};

use crate::data_labels::DataLabels;
use crate::enums::{Cursor, Placement, PointIntervalUnit, Stacking};
use crate::events::SeriesEvents;
use crate::helpers::{Animation, PointStart, Shadow};
use crate::plot_options::series::{SeriesPoint, SeriesTooltip};
use crate::states::States;

options! {
    /// Options for column series, with one vertical bar per value.
    pub struct PlotOptionsColumn {
        /// Allow this series' points to be selected by clicking on the
        /// bars. Default: false
        allow_point_select: bool => "allowPointSelect",
        /// Enable or disable the initial animation, or set the animation
        /// parameters. Default: true
        animation: Animation => "animation",
        /// The color of the border surrounding each column. Default: #FFFFFF
        border_color: Color => "borderColor",
        /// The corner radius of the border surrounding each column.
        /// Default: 0
        border_radius: Number => "borderRadius",
        /// The width of the border surrounding each column. Default: 1
        border_width: Number => "borderWidth",
        /// The main color of the series.
        color: Color => "color",
        /// When using automatic point colors pulled from the
        /// options.colors collection, this option determines whether the
        /// chart should receive one color per series or one color per
        /// point. Default: false
        color_by_point: bool => "colorByPoint",
        /// A series specific color set to apply instead of the global
        /// colors when colorByPoint is true.
        colors: Vec<Color> => "colors",
        /// When the series contains less points than the crop threshold,
        /// all points are drawn even if outside the visible plot area.
        /// Default: 300
        crop_threshold: Number => "cropThreshold",
        /// The cursor shown when hovering the series.
        cursor: Cursor => "cursor",
        /// Labels drawn next to the data points.
        data_labels: DataLabels => "dataLabels",
        /// Enable or disable mouse tracking for this series. Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// Padding between each value group, in x axis units. Default: 0.2
        group_padding: Number => "groupPadding",
        /// Whether to group non-stacked columns or to let them render
        /// independent of each other. Default: true
        grouping: bool => "grouping",
        /// The id of another series to link to. Default: null
        linked_to: String => "linkedTo",
        /// The minimal height for a column or width for a bar, in pixels.
        /// Useful when the smallest values would otherwise be invisible.
        /// Default: 0
        min_point_length: Number => "minPointLength",
        /// The color for the parts of the columns below the threshold.
        /// Default: null
        negative_color: Color => "negativeColor",
        /// Properties for each single point.
        point: SeriesPoint => "point",
        /// The interval of implicit x values. Default: 1
        point_interval: Number => "pointInterval",
        /// Irregular time unit for the point interval on datetime series.
        point_interval_unit: PointIntervalUnit => "pointIntervalUnit",
        /// Padding between each column or bar, in x axis units.
        /// Default: 0.1
        point_padding: Number => "pointPadding",
        /// Point placement on a categorized x axis. Default: null
        point_placement: Placement => "pointPlacement",
        /// The X axis range that each point is valid for, determining the
        /// width of the column. Default: null
        point_range: Number => "pointRange",
        /// The x value the implicit point sequence starts on. Default: 0
        point_start: PointStart => "pointStart",
        /// A pixel value specifying a fixed width for each column or bar.
        /// When null, the width is calculated from the pointPadding and
        /// groupPadding. Default: null
        point_width: Number => "pointWidth",
        /// Whether to select the series initially. Default: false
        selected: bool => "selected",
        /// Whether to apply a drop shadow to the columns. Default: false
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
        /// Sticky tracking of mouse events. Default: true
        sticky_tracking: bool => "stickyTracking",
        /// The y value serving as the base of the columns. Default: 0
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

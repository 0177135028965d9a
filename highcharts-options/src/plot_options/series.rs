use highcharts_script::{Color, Number};

use crate::data_labels::DataLabels;
use crate::enums::{Cursor, DashStyle, Placement, PointIntervalUnit, Stacking};
use crate::events::{PointEvents, SeriesEvents};
use crate::helpers::{Animation, PointStart, Shadow};
use crate::marker::Marker;
use crate::states::States;
use crate::tooltip::DateTimeLabelFormats;

options! {
    /// Per-point properties shared by all series types.
    pub struct SeriesPoint {
        /// Event listeners for each single point.
        events: PointEvents => "events",
    }
}

options! {
    /// Tooltip overrides for a single series. Properties are inherited
    /// from the chart-level tooltip, but only these can be set per
    /// series.
    pub struct SeriesTooltip {
        /// Date format overrides for the tooltip header.
        date_time_label_formats: DateTimeLabelFormats => "dateTimeLabelFormats",
        /// Whether the tooltip should follow the mouse as it moves.
        /// Default: false
        follow_pointer: bool => "followPointer",
        /// The HTML of the tooltip header line.
        header_format: String => "headerFormat",
        /// The HTML of the point's line in the tooltip.
        point_format: String => "pointFormat",
        /// How many decimals to show in each series' y value. Default: null
        value_decimals: Number => "valueDecimals",
        /// A string to prepend to each series' y value. Default: null
        value_prefix: String => "valuePrefix",
        /// A string to append to each series' y value. Default: null
        value_suffix: String => "valueSuffix",
        /// The format for the date in the tooltip header. Default: %A, %b %e, %Y
        x_date_format: String => "xDateFormat",
    }
}

options! {
    /// General options for all series types.
    pub struct PlotOptionsSeries {
        /// Allow this series' points to be selected by clicking on the
        /// markers, bars or pie slices. Default: false
        allow_point_select: bool => "allowPointSelect",
        /// Enable or disable the initial animation when a series is
        /// displayed, or set the animation parameters. Default: true
        animation: Animation => "animation",
        /// The main color of the series. In line type series it applies
        /// to the line and the point markers unless otherwise specified.
        color: Color => "color",
        /// Polar charts only. Whether to connect the ends of a line
        /// series plot across the extremes. Default: true
        connect_ends: bool => "connectEnds",
        /// Whether to connect a graph line across null points.
        /// Default: false
        connect_nulls: bool => "connectNulls",
        /// When the series contains less points than the crop threshold,
        /// all points are drawn even if outside the visible plot area.
        /// Default: 300
        crop_threshold: Number => "cropThreshold",
        /// You can set the cursor to 'pointer' if you have click events
        /// attached to the series, to signal that the points can be
        /// clicked.
        cursor: Cursor => "cursor",
        /// A name for the dash style to use for the graph. Default: Solid
        dash_style: DashStyle => "dashStyle",
        /// Labels drawn next to the data points.
        data_labels: DataLabels => "dataLabels",
        /// Enable or disable the mouse tracking for a specific series.
        /// For large datasets it improves performance. Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// Pixel width of the graph line. Default: 2
        line_width: Number => "lineWidth",
        /// The id of another series to link to. The linked series is not
        /// shown in the legend and reacts with the master series.
        /// Default: null
        linked_to: String => "linkedTo",
        /// Options for the point markers of line-like series.
        marker: Marker => "marker",
        /// The color for the parts of the graph or points that are below
        /// the threshold. Default: null
        negative_color: Color => "negativeColor",
        /// Properties for each single point.
        point: SeriesPoint => "point",
        /// If no x values are given for the points in a series,
        /// pointInterval defines the interval of the x values. Default: 1
        point_interval: Number => "pointInterval",
        /// On datetime series, this allows for setting the pointInterval
        /// to irregular time units, day, month and year.
        point_interval_unit: PointIntervalUnit => "pointIntervalUnit",
        /// In a column chart, 'on' draws the point on the tick, 'between'
        /// lays the columns out between ticks. Default: null
        point_placement: Placement => "pointPlacement",
        /// If no x values are given for the points in a series,
        /// pointStart defines on what value to start. For example, if a
        /// series contains one yearly value starting from 1945, set
        /// pointStart to 1945. Default: 0
        point_start: PointStart => "pointStart",
        /// Whether to select the series initially. Default: false
        selected: bool => "selected",
        /// Whether to apply a drop shadow to the graph line, or a shadow
        /// configuration. Default: false
        shadow: Shadow => "shadow",
        /// If true, and the series is selectable, a checkbox is displayed
        /// next to the legend item. Default: false
        show_checkbox: bool => "showCheckbox",
        /// Whether to display this particular series or series type in
        /// the legend. Default: true
        show_in_legend: bool => "showInLegend",
        /// Whether to stack the values of each series on top of each
        /// other. Default: null
        stacking: Stacking => "stacking",
        /// A wrapper object for all the series options in specific
        /// states.
        states: States => "states",
        /// Sticky tracking of mouse events. When true, the mouseOut
        /// event on a series isn't triggered until the mouse moves over
        /// another series, or out of the plot area. Default: true
        sticky_tracking: bool => "stickyTracking",
        /// The threshold, also called zero level or base level, serving
        /// as the base for columns and area fills. Default: 0
        threshold: Number => "threshold",
        /// A configuration object for the tooltip rendering of this
        /// series.
        tooltip: SeriesTooltip => "tooltip",
        /// When a series contains a data array longer than this, only
        /// one dimensional arrays of numbers, or arrays with x and y
        /// values are allowed. Default: 1000
        turbo_threshold: Number => "turboThreshold",
        /// Set the initial visibility of the series. Default: true
        visible: bool => "visible",
    }
}

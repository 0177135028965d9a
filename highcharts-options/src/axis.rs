//! Axis options shared by the x and y dimensions.
//!
//! The schema documents the two axes separately but their option sets
//! are the same; which dimension a node configures is decided by the
//! top-level key it is placed under (`xAxis`/`yAxis`).

use highcharts_script::{Color, Format, JsFunction, Number};

use crate::enums::{
    AxisTitleAlign, AxisType, DashStyle, HorizontalAlign, Overflow, TickPosition,
    TickmarkPlacement, VerticalAlign,
};
use crate::tooltip::DateTimeLabelFormats;

options! {
    /// Event listeners for the axis.
    pub struct AxisEvents {
        /// Fires after the minimum and maximum extremes are computed.
        after_set_extremes: JsFunction => "afterSetExtremes",
        /// Fires when the minimum and maximum is set for the axis, either
        /// by calling the setExtremes method or by selecting an area in
        /// the chart.
        set_extremes: JsFunction => "setExtremes",
    }
}

options! {
    /// The axis labels, shown next to the ticks.
    pub struct AxisLabels {
        /// What part of the string the given position is anchored to.
        align: HorizontalAlign => "align",
        /// Enable or disable the axis labels. Default: true
        enabled: bool => "enabled",
        /// Callback JavaScript function to format the label.
        formatter: JsFunction => "formatter",
        /// How to handle labels that flow outside the plot area.
        /// Default: justify
        overflow: Overflow => "overflow",
        /// Rotation of the labels in degrees. Default: 0
        rotation: Number => "rotation",
        /// Horizontal axes only: the number of lines to spread the labels
        /// over to make room or tighter labels. Default: null
        stagger_lines: Number => "staggerLines",
        /// To show only every n'th label on the axis, set the step to n.
        /// Default: null
        step: Number => "step",
        /// CSS styles for the label.
        style: String => "style" as Format::Templated("{ {} }"),
        /// Whether to use HTML to render the labels. Default: false
        use_html: bool => "useHTML",
        /// The x position offset of the label relative to the tick
        /// position on the axis. Default: 0
        x: Number => "x",
        /// The y position offset of the label relative to the tick
        /// position on the axis. Default: 3
        y: Number => "y",
    }
}

options! {
    /// The axis title, showing next to the axis line.
    pub struct AxisTitle {
        /// Alignment of the title relative to the axis values.
        /// Default: middle
        align: AxisTitleAlign => "align",
        /// The pixel distance between the axis labels or line and the
        /// title. Default: 0 for horizontal axes, 10 for vertical
        margin: Number => "margin",
        /// The distance of the axis title from the axis line. Default: null
        offset: Number => "offset",
        /// The rotation of the text in degrees. Default: 0
        rotation: Number => "rotation",
        /// CSS styles for the title.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The actual text of the axis title.
        text: String => "text",
    }
}

options! {
    /// Text labels for the plot lines.
    pub struct PlotLineLabel {
        /// Horizontal alignment of the label. Can be one of 'left',
        /// 'center' or 'right'. Default: center
        align: HorizontalAlign => "align",
        /// Rotation of the text label in degrees. Defaults to 0 for
        /// horizontal plot lines and 90 for vertical lines.
        rotation: Number => "rotation",
        /// CSS styles for the text label.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The text itself. A subset of HTML is supported.
        text: String => "text",
        /// The text alignment for the label. While `align` determines
        /// where the text's anchor point is placed, `textAlign` determines
        /// how the text is aligned against its anchor point. Defaults to
        /// the same as the `align` option.
        text_align: HorizontalAlign => "textAlign",
        /// Vertical alignment of the label relative to the plot line.
        /// Default: top
        vertical_align: VerticalAlign => "verticalAlign",
        /// Horizontal position relative the alignment. Default varies by
        /// orientation.
        x: Number => "x",
        /// Vertical position of the text baseline relative to the
        /// alignment. Default varies by orientation.
        y: Number => "y",
    }
}

options! {
    /// A line stretching across the plot area, marking a specific value
    /// on one of the axes.
    pub struct PlotLine {
        /// The color of the line.
        color: Color => "color",
        /// The dashing or dot style of the plot line. Default: Solid
        dash_style: DashStyle => "dashStyle",
        /// An id used for identifying the plot line in axis.removePlotLine.
        id: String => "id",
        /// Text labels for the plot lines.
        label: PlotLineLabel => "label",
        /// The position of the line in axis units.
        value: Number => "value",
        /// The width or thickness of the plot line.
        width: Number => "width",
        /// The z index of the plot line within the chart.
        z_index: Number => "zIndex",
    }
}

options! {
    /// Text labels for the plot bands.
    pub struct PlotBandLabel {
        /// Horizontal alignment of the label. Default: center
        align: HorizontalAlign => "align",
        /// Rotation of the text label in degrees. Default: 0
        rotation: Number => "rotation",
        /// CSS styles for the text label.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The text itself. A subset of HTML is supported.
        text: String => "text",
        /// The text alignment for the label. Defaults to the same as the
        /// `align` option.
        text_align: HorizontalAlign => "textAlign",
        /// Vertical alignment of the label relative to the plot band.
        /// Default: top
        vertical_align: VerticalAlign => "verticalAlign",
        /// Horizontal position relative the alignment. Default varies by
        /// orientation.
        x: Number => "x",
        /// Vertical position of the text baseline relative to the
        /// alignment. Default varies by orientation.
        y: Number => "y",
    }
}

options! {
    /// A colored band stretching across the plot area, marking an
    /// interval on one of the axes.
    pub struct PlotBand {
        /// The color of the plot band.
        color: Color => "color",
        /// The start position of the plot band in axis units.
        from: Number => "from",
        /// An id used for identifying the plot band in axis.removePlotBand.
        id: String => "id",
        /// Text labels for the plot bands.
        label: PlotBandLabel => "label",
        /// The end position of the plot band in axis units.
        to: Number => "to",
        /// The z index of the plot band within the chart.
        z_index: Number => "zIndex",
    }
}

options! {
    /// Options for one axis of the chart. The same node serves the x and
    /// the y dimension; placement under `xAxis` or `yAxis` decides which.
    pub struct Axis {
        /// Whether to allow decimals in this axis' ticks. Default: true
        allow_decimals: bool => "allowDecimals",
        /// When using an alternate grid color, a band is painted across
        /// the plot area between every other grid line.
        alternate_grid_color: Color => "alternateGridColor",
        /// If categories are present for the axis, names are used instead
        /// of numbers for that axis.
        categories: Vec<String> => "categories",
        /// For a datetime axis, the scale will automatically adjust to
        /// the appropriate unit; these formats override the defaults.
        date_time_label_formats: DateTimeLabelFormats => "dateTimeLabelFormats",
        /// Whether to force the axis to end on a tick. Default: false
        end_on_tick: bool => "endOnTick",
        /// Event listeners for the axis.
        events: AxisEvents => "events",
        /// Color of the grid lines extending the ticks across the plot
        /// area. Default: #C0C0C0
        grid_line_color: Color => "gridLineColor",
        /// The dash or dot style of the grid lines. Default: Solid
        grid_line_dash_style: DashStyle => "gridLineDashStyle",
        /// The width of the grid lines extending the ticks across the
        /// plot area. Default: 0
        grid_line_width: Number => "gridLineWidth",
        /// An id for the axis, usable with chart.get().
        id: String => "id",
        /// The axis labels, shown next to the ticks.
        labels: AxisLabels => "labels",
        /// The color of the line marking the axis itself. Default: #C0D0E0
        line_color: Color => "lineColor",
        /// The width of the line marking the axis itself. Default: 1
        line_width: Number => "lineWidth",
        /// Index of another axis that this axis is linked to; the two
        /// move together as if they were the same. Default: null
        linked_to: Number => "linkedTo",
        /// The maximum value of the axis. When null, the max is
        /// automatically calculated. Default: null
        max: Number => "max",
        /// Padding of the max value relative to the length of the axis.
        /// Default: 0.01
        max_padding: Number => "maxPadding",
        /// The minimum value of the axis. When null, the min is
        /// automatically calculated. Default: null
        min: Number => "min",
        /// Padding of the min value relative to the length of the axis.
        /// Default: 0.01
        min_padding: Number => "minPadding",
        /// The minimum range to display on the axis.
        min_range: Number => "minRange",
        /// The minimum tick interval allowed in axis values.
        min_tick_interval: Number => "minTickInterval",
        /// Color of the minor, secondary grid lines. Default: #E0E0E0
        minor_grid_line_color: Color => "minorGridLineColor",
        /// The dash or dot style of the minor grid lines. Default: Solid
        minor_grid_line_dash_style: DashStyle => "minorGridLineDashStyle",
        /// Width of the minor, secondary grid lines. Default: 1
        minor_grid_line_width: Number => "minorGridLineWidth",
        /// Color for the minor tick marks.  Default: #A0A0A0
        minor_tick_color: Color => "minorTickColor",
        /// Tick interval in scale units for the minor ticks; null
        /// disables minor ticks. Default: null
        minor_tick_interval: Number => "minorTickInterval",
        /// The pixel length of the minor tick marks. Default: 2
        minor_tick_length: Number => "minorTickLength",
        /// The position of the minor tick marks relative to the axis
        /// line. Default: outside
        minor_tick_position: TickPosition => "minorTickPosition",
        /// The pixel width of the minor tick mark. Default: 0
        minor_tick_width: Number => "minorTickWidth",
        /// The distance in pixels from the plot area to the axis line.
        /// Default: 0
        offset: Number => "offset",
        /// Whether to display the axis on the opposite side of the normal.
        /// Default: false
        opposite: bool => "opposite",
        /// Colored bands stretching across the plot area.
        plot_bands: Vec<PlotBand> => "plotBands",
        /// Lines stretching across the plot area.
        plot_lines: Vec<PlotLine> => "plotLines",
        /// Whether to reverse the axis so that the highest number is
        /// closest to the origin. Default: false
        reversed: bool => "reversed",
        /// Whether to show the axis line and title when the axis has no
        /// data. Default: true
        show_empty: bool => "showEmpty",
        /// Whether to show the first tick label. Default: true
        show_first_label: bool => "showFirstLabel",
        /// Whether to show the last tick label. Default: false
        show_last_label: bool => "showLastLabel",
        /// For datetime axes, the day of the week to use as week start.
        /// Default: 1
        start_of_week: Number => "startOfWeek",
        /// Whether to force the axis to start on a tick. Default: false
        start_on_tick: bool => "startOnTick",
        /// Color for the main tick marks. Default: #C0D0E0
        tick_color: Color => "tickColor",
        /// The interval of the tick marks in axis units. When null, the
        /// tick interval is computed. Default: null
        tick_interval: Number => "tickInterval",
        /// The pixel length of the main tick marks. Default: 5
        tick_length: Number => "tickLength",
        /// If tickInterval is null, this option sets the approximate
        /// pixel interval of the tick marks. Default: 72/100
        tick_pixel_interval: Number => "tickPixelInterval",
        /// The position of the major tick marks relative to the axis
        /// line. Default: outside
        tick_position: TickPosition => "tickPosition",
        /// The pixel width of the major tick marks. Default: 1
        tick_width: Number => "tickWidth",
        /// For categorized axes only: whether the tick marks are placed
        /// on the category or between categories. Default: between
        tickmark_placement: TickmarkPlacement => "tickmarkPlacement",
        /// The axis title, showing next to the axis line.
        title: AxisTitle => "title",
        /// The type of axis. Default: linear
        axis_type: AxisType => "type",
    }
}

use highcharts_script::{Color, Number};

use crate::enums::{Cursor, DashStyle, Placement};
use crate::events::SeriesEvents;
use crate::helpers::{PercentageOrPixel, PointStart};
use crate::plot_options::series::{SeriesPoint, SeriesTooltip};
use crate::states::States;

options! {
    /// Options for error bar series. Error bars are a graphical
    /// representation of the variability of data, used on graphs to
    /// indicate the error or uncertainty in a reported measurement.
    pub struct PlotOptionsErrorbar {
        /// Allow this series' points to be selected by clicking on the
        /// markers, bars or pie slices. Default: false
        allow_point_select: bool => "allowPointSelect",
        /// The main color of the bars. This can be overridden by
        /// stemColor and whiskerColor individually. Default: #000000
        color: Color => "color",
        /// When using automatic point colors pulled from the
        /// options.colors collection, this option determines whether the
        /// chart should receive one color per series or one color per
        /// point. Default: false
        color_by_point: bool => "colorByPoint",
        /// A series specific or series type specific color set to apply
        /// instead of the global colors when colorByPoint is true.
        colors: Vec<Color> => "colors",
        /// You can set the cursor to 'pointer' if you have click events
        /// attached to the series, to signal to the user that the points
        /// and lines can be clicked.
        cursor: Cursor => "cursor",
        /// Enable or disable the mouse tracking for a specific series.
        /// This includes point tooltips and click events on graphs and
        /// points. For large datasets it improves performance.
        /// Default: true
        enable_mouse_tracking: bool => "enableMouseTracking",
        /// Event listeners for the series.
        events: SeriesEvents => "events",
        /// An id for the series. This can be used after render time to
        /// get a pointer to the series object through `chart.get()`.
        id: String => "id",
        /// The width of the line surrounding the box. If any of
        /// stemWidth, medianWidth or whiskerWidth are null, the lineWidth
        /// also applies to these lines. Default: 1
        line_width: Number => "lineWidth",
        /// The parent series of the error bar. The default value links it
        /// to the previous series. Otherwise, use the id of the parent
        /// series. Default: :previous
        linked_to: String => "linkedTo",
        /// The color for the parts of the graph or points that are below
        /// the threshold. Default: null
        negative_color: Color => "negativeColor",
        /// Properties for each single point.
        point: SeriesPoint => "point",
        /// If no x values are given for the points in a series,
        /// pointInterval defines the interval of the x values. For
        /// example, if a series contains one value every decade starting
        /// from year 0, set pointInterval to 10. Default: 1
        point_interval: Number => "pointInterval",
        /// Padding between each column or bar, in x axis units.
        /// Default: 0.1
        point_padding: Number => "pointPadding",
        /// When pointPlacement is 'on', the point will not create any
        /// padding of the X axis; 'between' lays the columns out between
        /// ticks. Defaults to null in cartesian charts, 'between' in
        /// polar charts.
        point_placement: Placement => "pointPlacement",
        /// The X axis range that each point is valid for. This determines
        /// the width of the column. On a categorized axis, the range will
        /// be 1 by default (one category unit). Default: null
        point_range: Number => "pointRange",
        /// If no x values are given for the points in a series,
        /// pointStart defines on what value to start. For example, if a
        /// series contains one yearly value starting from 1945, set
        /// pointStart to 1945. Default: 0
        point_start: PointStart => "pointStart",
        /// A pixel value specifying a fixed width for each column or bar.
        /// When null, the width is calculated from the pointPadding and
        /// groupPadding. Default: null
        point_width: Number => "pointWidth",
        /// Whether to select the series initially. If showCheckbox is
        /// true, the checkbox next to the series name will be checked for
        /// a selected series. Default: false
        selected: bool => "selected",
        /// A wrapper object for all the series options in specific
        /// states.
        states: States => "states",
        /// The color of the stem, the vertical line extending from the
        /// box to the whiskers. If null, the series color is used.
        /// Default: null
        stem_color: Color => "stemColor",
        /// The dash style of the stem, the vertical line extending from
        /// the box to the whiskers. Default: Solid
        stem_dash_style: DashStyle => "stemDashStyle",
        /// The width of the stem, the vertical line extending from the
        /// box to the whiskers. If null, the width is inherited from the
        /// lineWidth option. Default: null
        stem_width: Number => "stemWidth",
        /// Sticky tracking of mouse events. When true, the mouseOut event
        /// on a series isn't triggered until the mouse moves over another
        /// series, or out of the plot area. Default: true
        sticky_tracking: bool => "stickyTracking",
        /// A configuration object for the tooltip rendering of each
        /// single series. Properties are inherited from the chart-level
        /// tooltip, but only the series-level properties can be defined
        /// here.
        tooltip: SeriesTooltip => "tooltip",
        /// When a series contains a data array that is longer than this,
        /// only one dimensional arrays of numbers, or two dimensional
        /// arrays with x and y values are allowed. This saves expensive
        /// data checking and indexing in long series. Default: 1000
        turbo_threshold: Number => "turboThreshold",
        /// Set the initial visibility of the series. Default: true
        visible: bool => "visible",
        /// The color of the whiskers, the horizontal lines marking low
        /// and high values. When null, the general series color is used.
        /// Default: null
        whisker_color: Color => "whiskerColor",
        /// The length of the whiskers, the horizontal lines marking low
        /// and high values. It can be a numerical pixel value, or a
        /// percentage value of the box width. Set 0 to disable whiskers.
        /// Default: 50%
        whisker_length: PercentageOrPixel => "whiskerLength",
        /// The line width of the whiskers, the horizontal lines marking
        /// low and high values. When null, the general lineWidth applies.
        /// Default: null
        whisker_width: Number => "whiskerWidth",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use highcharts_script::OptionNode;

    #[test]
    fn test_whisker_length_percentage_form() {
        let errorbar = PlotOptionsErrorbar::new()
            .whisker_length(PercentageOrPixel::percent(50))
            .whisker_width(1);
        assert_eq!(
            errorbar.to_object().to_script_text(),
            "{ whiskerLength: '50%', whiskerWidth: 1 }"
        );
    }

    #[test]
    fn test_point_start_accepts_dates() {
        let errorbar =
            PlotOptionsErrorbar::new().point_start(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(
            errorbar.to_object().to_script_text(),
            "{ pointStart: Date.UTC(2010, 0, 1) }"
        );
    }
}

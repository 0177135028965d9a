//! Per-series-type option nodes.
//!
//! `PlotOptions` is the top-level wrapper; options set on a type inside
//! it apply to all series of that type. The same nodes double as
//! per-series overrides when attached to a single series, where their
//! entries are spliced inline into the series object.

pub mod area;
pub mod bar;
pub mod bubble;
pub mod column;
pub mod errorbar;
pub mod line;
pub mod pie;
pub mod scatter;
pub mod series;
pub mod spline;

pub use area::PlotOptionsArea;
pub use bar::PlotOptionsBar;
pub use bubble::PlotOptionsBubble;
pub use column::PlotOptionsColumn;
pub use errorbar::PlotOptionsErrorbar;
pub use line::PlotOptionsLine;
pub use pie::PlotOptionsPie;
pub use scatter::PlotOptionsScatter;
pub use series::{PlotOptionsSeries, SeriesPoint, SeriesTooltip};
pub use spline::PlotOptionsSpline;

options! {
    /// A wrapper object for config objects for each series type. The
    /// config objects for each series can also be overridden for each
    /// series item as given in the series array.
    pub struct PlotOptions {
        area: PlotOptionsArea => "area",
        bar: PlotOptionsBar => "bar",
        bubble: PlotOptionsBubble => "bubble",
        column: PlotOptionsColumn => "column",
        errorbar: PlotOptionsErrorbar => "errorbar",
        line: PlotOptionsLine => "line",
        pie: PlotOptionsPie => "pie",
        scatter: PlotOptionsScatter => "scatter",
        /// General options for all series types.
        series: PlotOptionsSeries => "series",
        spline: PlotOptionsSpline => "spline",
    }
}

//! Strongly-typed option nodes mirroring the Highcharts configuration
//! schema.
//!
//! Each struct models one nesting level of the configuration; every field
//! is optional and unset fields leave no trace in the output. Nodes are
//! declared through the [`options!`] macro, which generates the struct,
//! chainable setters, serde derives, and the conversion into the script
//! value model of `highcharts-script`.

pub use highcharts_script::{
    Color, Entry, Format, JsFunction, Number, OptionNode, ScriptError, ScriptObject, ScriptValue,
    ToScriptValue,
};

#[macro_use]
mod macros;

pub mod axis;
pub mod chart;
pub mod credits;
pub mod data_labels;
pub mod enums;
pub mod events;
pub mod exporting;
pub mod global;
pub mod helpers;
pub mod labels;
pub mod legend;
pub mod loading;
pub mod marker;
pub mod navigation;
pub mod pane;
pub mod plot_options;
pub mod series;
pub mod states;
pub mod title;
pub mod tooltip;

pub use axis::{Axis, AxisEvents, AxisLabels, AxisTitle, PlotBand, PlotBandLabel, PlotLine, PlotLineLabel};
pub use chart::{Chart, ChartEvents};
pub use credits::{Credits, CreditsPosition};
pub use data_labels::DataLabels;
pub use enums::*;
pub use events::{PointEvents, SeriesEvents};
pub use exporting::Exporting;
pub use global::{Global, Lang};
pub use helpers::{
    Animation, AnimationConfig, BackColor, Gradient, PercentageOrPixel, PointStart, Shadow,
    ShadowConfig,
};
pub use labels::{Labels, LabelsItem};
pub use legend::{Legend, LegendNavigation, LegendTitle};
pub use loading::Loading;
pub use marker::{Marker, MarkerHoverState, MarkerSelectState, MarkerStates};
pub use navigation::Navigation;
pub use pane::{Pane, PaneBackground};
pub use plot_options::{
    PlotOptions, PlotOptionsArea, PlotOptionsBar, PlotOptionsBubble, PlotOptionsColumn,
    PlotOptionsErrorbar, PlotOptionsLine, PlotOptionsPie, PlotOptionsScatter, PlotOptionsSeries,
    PlotOptionsSpline, SeriesPoint, SeriesTooltip,
};
pub use series::{Data, Point, Series, SeriesPlotOptions};
pub use states::{HoverState, States};
pub use title::{Subtitle, Title};
pub use tooltip::{DateTimeLabelFormats, Tooltip};

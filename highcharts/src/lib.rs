//! Assembling complete Highcharts charts from typed option nodes.
//!
//! [`Highcharts`] collects the option nodes of `highcharts-options` into
//! one chart, together with page-level JavaScript variables and helper
//! functions, and renders the whole thing as a configuration script or an
//! embeddable HTML fragment. The object-literal serialization itself
//! lives in `highcharts-script`.

pub mod chart;
pub mod error;
pub mod prelude;
mod render;

pub use chart::{GlobalOptions, Highcharts};
pub use error::HighchartsError;

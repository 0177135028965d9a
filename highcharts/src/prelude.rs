//! Single-import convenience: the chart builder plus every option node.

pub use crate::chart::{GlobalOptions, Highcharts};
pub use crate::error::HighchartsError;

// The whole schema surface, including the re-exported script value types
pub use highcharts_options::*;

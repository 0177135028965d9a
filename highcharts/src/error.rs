use thiserror::Error;

#[derive(Error, Debug)]
pub enum HighchartsError {
    #[error("invalid chart name '{name}': must be a JavaScript identifier")]
    InvalidChartName { name: String },

    #[error("script error")]
    Script(#[from] highcharts_script::ScriptError),
}

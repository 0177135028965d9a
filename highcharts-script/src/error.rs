use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("css color parse error")]
    InvalidColor(#[from] csscolorparser::ParseColorError),
}

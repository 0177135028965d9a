pub mod color;
pub mod error;
pub mod object;
pub mod value;
mod write;

pub use color::Color;
pub use error::ScriptError;
pub use object::{Entry, Format, OptionNode, ScriptObject};
pub use value::{JsFunction, Number, ScriptValue, ToScriptValue};

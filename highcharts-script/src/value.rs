use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::Visitor;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::object::{Entry, Format, ScriptObject};

/// Maximum magnitude that can be rendered exactly as an integer (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Numeric option value.
///
/// JavaScript has a single number type, so every numeric option funnels
/// through this wrapper. Integer-valued numbers render in integer form
/// (`5`, not `5.0`) no matter which Rust type they were set from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Number(f64);

impl Number {
    pub fn new(value: f64) -> Self {
        Number(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether the value renders in integer form
    pub fn is_integer(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            // No script literal for NaN or infinities
            write!(f, "null")
        } else if self.is_integer() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number(value as f64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number(value as f64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number(value as f64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number(value as f64)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number(value as f64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number(value as f64)
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_integer() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Number::from(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Number::from(v))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Number::from(v))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}

/// A JavaScript function carried verbatim into the output.
///
/// Options like `tooltip.formatter` take functions, which have no quoted
/// encoding. The script writer emits the text untouched; the JSON
/// serializer falls back to a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsFunction(String);

impl JsFunction {
    pub fn new(text: impl Into<String>) -> Self {
        JsFunction(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsFunction {
    fn from(text: &str) -> Self {
        JsFunction(text.to_string())
    }
}

impl From<String> for JsFunction {
    fn from(text: String) -> Self {
        JsFunction(text)
    }
}

/// One literal shape of the configuration syntax.
///
/// Every populated option lowers to one of these before the writer
/// renders it, so formatting decisions live in a single place.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Null,
    Bool(bool),
    Number(Number),
    Str(String),
    /// Renders as `Date.UTC(...)` with a zero-based month
    Date(NaiveDateTime),
    /// Verbatim JavaScript: function bodies, variable references
    Raw(String),
    Array(Vec<ScriptValue>),
    Object(ScriptObject),
}

impl ScriptValue {
    /// Verbatim JavaScript that bypasses quoting
    pub fn raw(text: impl Into<String>) -> Self {
        ScriptValue::Raw(text.into())
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<Number> for ScriptValue {
    fn from(value: Number) -> Self {
        ScriptValue::Number(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<f32> for ScriptValue {
    fn from(value: f32) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<u32> for ScriptValue {
    fn from(value: u32) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<usize> for ScriptValue {
    fn from(value: usize) -> Self {
        ScriptValue::Number(value.into())
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::Str(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::Str(value)
    }
}

impl From<Color> for ScriptValue {
    fn from(value: Color) -> Self {
        ScriptValue::Str(value.to_css_string())
    }
}

impl From<JsFunction> for ScriptValue {
    fn from(value: JsFunction) -> Self {
        ScriptValue::Raw(value.0)
    }
}

impl From<NaiveDateTime> for ScriptValue {
    fn from(value: NaiveDateTime) -> Self {
        ScriptValue::Date(value)
    }
}

impl From<NaiveDate> for ScriptValue {
    fn from(value: NaiveDate) -> Self {
        ScriptValue::Date(value.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for ScriptValue {
    fn from(value: DateTime<Utc>) -> Self {
        ScriptValue::Date(value.naive_utc())
    }
}

impl<T: Into<ScriptValue>> From<Vec<T>> for ScriptValue {
    fn from(values: Vec<T>) -> Self {
        ScriptValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Pairs render as two-element arrays, the `[x, y]` point form
impl<A: Into<ScriptValue>, B: Into<ScriptValue>> From<(A, B)> for ScriptValue {
    fn from((a, b): (A, B)) -> Self {
        ScriptValue::Array(vec![a.into(), b.into()])
    }
}

impl From<serde_json::Value> for ScriptValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ScriptValue::Null,
            serde_json::Value::Bool(b) => ScriptValue::Bool(b),
            serde_json::Value::Number(number) => {
                // i64/u64 first so large integers keep their integer form
                if let Some(i) = number.as_i64() {
                    ScriptValue::from(i)
                } else if let Some(u) = number.as_u64() {
                    ScriptValue::Number(Number::from(u))
                } else {
                    ScriptValue::from(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(text) => ScriptValue::Str(text),
            serde_json::Value::Array(items) => {
                ScriptValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => {
                let mut object = ScriptObject::new();
                for (key, item) in fields {
                    object.push(Entry::dynamic(key, item.into()));
                }
                ScriptValue::Object(object)
            }
        }
    }
}

impl Serialize for ScriptValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScriptValue::Null => serializer.serialize_unit(),
            ScriptValue::Bool(b) => serializer.serialize_bool(*b),
            ScriptValue::Number(number) => number.serialize(serializer),
            ScriptValue::Str(text) => serializer.serialize_str(text),
            // Epoch milliseconds, the form Highcharts takes for datetime axes
            ScriptValue::Date(datetime) => {
                serializer.serialize_i64(datetime.and_utc().timestamp_millis())
            }
            ScriptValue::Raw(text) => serializer.serialize_str(text),
            ScriptValue::Array(items) => items.serialize(serializer),
            ScriptValue::Object(object) => {
                let mut map = serializer.serialize_map(None)?;
                serialize_object_into(&mut map, object)?;
                map.end()
            }
        }
    }
}

/// Entries marked for splicing flatten into the parent map, matching what
/// the script writer does with them.
fn serialize_object_into<M: SerializeMap>(map: &mut M, object: &ScriptObject) -> Result<(), M::Error> {
    for entry in object.entries() {
        match (entry.format, &entry.value) {
            (Format::BareUnbraced, ScriptValue::Object(inner)) => {
                serialize_object_into(map, inner)?
            }
            _ => map.serialize_entry(entry.name.as_ref(), &entry.value)?,
        }
    }
    Ok(())
}

impl<'de> Deserialize<'de> for ScriptValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(ScriptValue::from(value))
    }
}

/// Conversion into the script value model.
///
/// Implemented for the scalar option types, arrays of them, and (through
/// the options macro) every option node.
pub trait ToScriptValue {
    fn to_script_value(&self) -> ScriptValue;
}

impl ToScriptValue for bool {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Bool(*self)
    }
}

impl ToScriptValue for Number {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Number(*self)
    }
}

impl ToScriptValue for String {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Str(self.clone())
    }
}

impl ToScriptValue for str {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Str(self.to_string())
    }
}

impl ToScriptValue for Color {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Str(self.to_css_string())
    }
}

impl ToScriptValue for JsFunction {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Raw(self.0.clone())
    }
}

impl ToScriptValue for NaiveDateTime {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Date(*self)
    }
}

impl ToScriptValue for ScriptValue {
    fn to_script_value(&self) -> ScriptValue {
        self.clone()
    }
}

impl<T: ToScriptValue> ToScriptValue for Vec<T> {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Array(self.iter().map(ToScriptValue::to_script_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_integer_form() {
        assert_eq!(Number::from(5.0).to_string(), "5");
        assert_eq!(Number::from(-3).to_string(), "-3");
        assert_eq!(Number::from(2.5).to_string(), "2.5");
        assert_eq!(Number::from(0.0).to_string(), "0");
    }

    #[test]
    fn test_number_non_finite_renders_null() {
        assert_eq!(Number::from(f64::NAN).to_string(), "null");
        assert_eq!(Number::from(f64::INFINITY).to_string(), "null");
    }

    #[test]
    fn test_number_large_magnitude_stays_float_form() {
        // Beyond 2^53 the integer cast would silently lose precision
        let big = Number::from(1e16);
        assert!(!big.is_integer());
        assert_eq!(big.to_string(), "10000000000000000");
    }

    #[test]
    fn test_pair_becomes_point_array() {
        let value = ScriptValue::from((3, 10.5));
        assert_eq!(
            value,
            ScriptValue::Array(vec![ScriptValue::from(3), ScriptValue::from(10.5)])
        );
    }

    #[test]
    fn test_json_bridge_preserves_shapes() {
        let json = serde_json::json!({
            "enabled": true,
            "values": [1, 2.5, null],
            "label": "a"
        });
        let value = ScriptValue::from(json);
        let ScriptValue::Object(object) = value else {
            panic!("expected an object");
        };
        assert_eq!(object.len(), 3);
        assert_eq!(
            object.entries()[2].value,
            ScriptValue::Array(vec![
                ScriptValue::from(1),
                ScriptValue::from(2.5),
                ScriptValue::Null
            ])
        );
    }

    #[test]
    fn test_number_serializes_as_integer_when_exact() {
        assert_eq!(serde_json::to_string(&Number::from(5.0)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Number::from(5.25)).unwrap(), "5.25");
    }

    #[test]
    fn test_script_value_json_round_trip() {
        let value = ScriptValue::from(vec![1, 2, 3]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: ScriptValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_date_serializes_as_epoch_millis() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_time(NaiveTime::MIN);
        let json = serde_json::to_string(&ScriptValue::from(date)).unwrap();
        assert_eq!(json, "1577836800000");
    }
}

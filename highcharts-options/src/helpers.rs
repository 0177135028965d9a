//! Hybrid value types.
//!
//! Several schema options accept more than one shape: a size can be a
//! pixel count or a percentage, a series start can be a number or a
//! date, an animation can be a flag or a configuration object. Each
//! hybrid is a closed tagged union; exactly one variant is populated and
//! each variant renders exactly one literal form. The variants never
//! coerce into each other.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use highcharts_script::{Color, Number, ScriptObject, ScriptValue, ToScriptValue};

use crate::enums::AnimationEasing;

/// Pixel count or percentage of a reference box.
///
/// Plain numbers convert to `Pixel`; percentages are built with
/// [`PercentageOrPixel::percent`]. A percentage renders as the quoted
/// token (`'50%'`), a pixel count as a bare number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentageOrPixel {
    Pixel(Number),
    Percentage(Number),
}

impl PercentageOrPixel {
    pub fn percent(value: impl Into<Number>) -> Self {
        PercentageOrPixel::Percentage(value.into())
    }

    pub fn pixels(value: impl Into<Number>) -> Self {
        PercentageOrPixel::Pixel(value.into())
    }
}

impl From<Number> for PercentageOrPixel {
    fn from(value: Number) -> Self {
        PercentageOrPixel::Pixel(value)
    }
}

impl From<i32> for PercentageOrPixel {
    fn from(value: i32) -> Self {
        PercentageOrPixel::Pixel(value.into())
    }
}

impl From<i64> for PercentageOrPixel {
    fn from(value: i64) -> Self {
        PercentageOrPixel::Pixel(value.into())
    }
}

impl From<f64> for PercentageOrPixel {
    fn from(value: f64) -> Self {
        PercentageOrPixel::Pixel(value.into())
    }
}

impl ToScriptValue for PercentageOrPixel {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            PercentageOrPixel::Pixel(number) => ScriptValue::Number(*number),
            PercentageOrPixel::Percentage(number) => ScriptValue::Str(format!("{number}%")),
        }
    }
}

impl Serialize for PercentageOrPixel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PercentageOrPixel::Pixel(number) => number.serialize(serializer),
            PercentageOrPixel::Percentage(number) => {
                serializer.serialize_str(&format!("{number}%"))
            }
        }
    }
}

impl<'de> Deserialize<'de> for PercentageOrPixel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PercentageOrPixelVisitor;

        impl Visitor<'_> for PercentageOrPixelVisitor {
            type Value = PercentageOrPixel;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number or a percentage string like \"50%\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PercentageOrPixel::Pixel(v.into()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(PercentageOrPixel::Pixel(Number::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(PercentageOrPixel::Pixel(v.into()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                let digits = v
                    .strip_suffix('%')
                    .ok_or_else(|| E::custom("percentage string must end in '%'"))?;
                let value: f64 = digits.trim().parse().map_err(E::custom)?;
                Ok(PercentageOrPixel::Percentage(value.into()))
            }
        }

        deserializer.deserialize_any(PercentageOrPixelVisitor)
    }
}

/// Start of the x values when a series carries no explicit x data.
///
/// A number starts a plain value sequence; a date starts a datetime
/// sequence and renders as `Date.UTC(...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointStart {
    Value(Number),
    Date(NaiveDateTime),
}

impl From<Number> for PointStart {
    fn from(value: Number) -> Self {
        PointStart::Value(value)
    }
}

impl From<i32> for PointStart {
    fn from(value: i32) -> Self {
        PointStart::Value(value.into())
    }
}

impl From<i64> for PointStart {
    fn from(value: i64) -> Self {
        PointStart::Value(value.into())
    }
}

impl From<f64> for PointStart {
    fn from(value: f64) -> Self {
        PointStart::Value(value.into())
    }
}

impl From<NaiveDate> for PointStart {
    fn from(value: NaiveDate) -> Self {
        PointStart::Date(value.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for PointStart {
    fn from(value: NaiveDateTime) -> Self {
        PointStart::Date(value)
    }
}

impl From<DateTime<Utc>> for PointStart {
    fn from(value: DateTime<Utc>) -> Self {
        PointStart::Date(value.naive_utc())
    }
}

impl ToScriptValue for PointStart {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            PointStart::Value(number) => ScriptValue::Number(*number),
            PointStart::Date(datetime) => ScriptValue::Date(*datetime),
        }
    }
}

impl Serialize for PointStart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Dates become epoch milliseconds, like every other date in JSON
        self.to_script_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PointStart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // JSON carries no date type, so numbers always come back as values
        let number = Number::deserialize(deserializer)?;
        Ok(PointStart::Value(number))
    }
}

options! {
    /// Animation parameters.
    pub struct AnimationConfig {
        /// The duration of the animation in milliseconds.
        duration: Number => "duration",
        /// The name of the easing function.
        easing: AnimationEasing => "easing",
    }
}

/// Animation toggle or full animation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Animation {
    Enabled(bool),
    Config(AnimationConfig),
}

impl From<bool> for Animation {
    fn from(value: bool) -> Self {
        Animation::Enabled(value)
    }
}

impl From<AnimationConfig> for Animation {
    fn from(config: AnimationConfig) -> Self {
        Animation::Config(config)
    }
}

impl ToScriptValue for Animation {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            Animation::Enabled(enabled) => ScriptValue::Bool(*enabled),
            Animation::Config(config) => config.to_script_value(),
        }
    }
}

options! {
    /// Shadow parameters.
    pub struct ShadowConfig {
        /// The color of the shadow. Default: black
        color: Color => "color",
        /// The horizontal offset of the shadow in pixels. Default: 1
        offset_x: Number => "offsetX",
        /// The vertical offset of the shadow in pixels. Default: 1
        offset_y: Number => "offsetY",
        /// The opacity of the shadow. Default: 0.15
        opacity: Number => "opacity",
        /// The width of the shadow in pixels. Default: 3
        width: Number => "width",
    }
}

/// Shadow toggle or full shadow parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shadow {
    Enabled(bool),
    Config(ShadowConfig),
}

impl From<bool> for Shadow {
    fn from(value: bool) -> Self {
        Shadow::Enabled(value)
    }
}

impl From<ShadowConfig> for Shadow {
    fn from(config: ShadowConfig) -> Self {
        Shadow::Config(config)
    }
}

impl ToScriptValue for Shadow {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            Shadow::Enabled(enabled) => ScriptValue::Bool(*enabled),
            Shadow::Config(config) => config.to_script_value(),
        }
    }
}

/// Linear gradient fill, the `{ linearGradient, stops }` object form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    /// Start and end point as `[x1, y1, x2, y2]` in pixels
    pub linear_gradient: [Number; 4],
    /// Color stops as positions in the 0..1 range
    pub stops: Vec<(Number, Color)>,
}

impl Gradient {
    pub fn new(linear_gradient: [f64; 4], stops: Vec<(f64, Color)>) -> Self {
        Gradient {
            linear_gradient: linear_gradient.map(Number::from),
            stops: stops
                .into_iter()
                .map(|(position, color)| (position.into(), color))
                .collect(),
        }
    }
}

impl ToScriptValue for Gradient {
    fn to_script_value(&self) -> ScriptValue {
        let mut object = ScriptObject::new();
        object.push_value("linearGradient", self.linear_gradient.to_vec());
        object.push_value(
            "stops",
            ScriptValue::Array(
                self.stops
                    .iter()
                    .map(|(position, color)| ScriptValue::from((*position, *color)))
                    .collect(),
            ),
        );
        ScriptValue::Object(object)
    }
}

/// Solid color or gradient fill.
///
/// Background options accept either form; the gradient renders as its
/// object literal, the color as its CSS token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackColor {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for BackColor {
    fn from(color: Color) -> Self {
        BackColor::Color(color)
    }
}

impl From<Gradient> for BackColor {
    fn from(gradient: Gradient) -> Self {
        BackColor::Gradient(gradient)
    }
}

impl ToScriptValue for BackColor {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            BackColor::Color(color) => color.to_script_value(),
            BackColor::Gradient(gradient) => gradient.to_script_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_percentage_renders_quoted_token() {
        let length = PercentageOrPixel::percent(50);
        assert_eq!(length.to_script_value().to_script_text(), "'50%'");
    }

    #[test]
    fn test_pixel_renders_bare_number() {
        let length = PercentageOrPixel::from(120);
        assert_eq!(length.to_script_value().to_script_text(), "120");
    }

    #[test]
    fn test_percentage_never_coerces() {
        // Same magnitude, different meaning, different output
        assert_ne!(
            PercentageOrPixel::percent(50).to_script_value(),
            PercentageOrPixel::from(50).to_script_value()
        );
    }

    #[test]
    fn test_percentage_serde_round_trip() {
        let json = serde_json::to_string(&PercentageOrPixel::percent(50)).unwrap();
        assert_eq!(json, "\"50%\"");
        let back: PercentageOrPixel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PercentageOrPixel::percent(50));
        let pixels: PercentageOrPixel = serde_json::from_str("120").unwrap();
        assert_eq!(pixels, PercentageOrPixel::from(120));
    }

    #[test]
    fn test_point_start_value_form() {
        let start = PointStart::from(1945);
        assert_eq!(start.to_script_value().to_script_text(), "1945");
    }

    #[test]
    fn test_point_start_date_form() {
        let start = PointStart::from(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(
            start.to_script_value().to_script_text(),
            "Date.UTC(2010, 0, 1)"
        );
    }

    #[test]
    fn test_animation_both_forms() {
        assert_eq!(
            Animation::from(false).to_script_value().to_script_text(),
            "false"
        );
        let config = Animation::from(
            AnimationConfig::new()
                .duration(400)
                .easing(AnimationEasing::Linear),
        );
        assert_eq!(
            config.to_script_value().to_script_text(),
            "{ duration: 400, easing: 'linear' }"
        );
    }

    #[test]
    fn test_shadow_both_forms() {
        assert_eq!(
            Shadow::from(true).to_script_value().to_script_text(),
            "true"
        );
        let config = Shadow::from(ShadowConfig::new().offset_x(2).opacity(0.2));
        assert_eq!(
            config.to_script_value().to_script_text(),
            "{ offsetX: 2, opacity: 0.2 }"
        );
    }

    #[test]
    fn test_gradient_object_form() {
        let gradient = Gradient::new(
            [0.0, 0.0, 0.0, 300.0],
            vec![(0.0, Color::rgb(255, 255, 255)), (1.0, Color::rgb(0, 0, 0))],
        );
        assert_eq!(
            gradient.to_script_value().to_script_text(),
            "{ linearGradient: [0, 0, 0, 300], stops: [[0, '#ffffff'], [1, '#000000']] }"
        );
    }

    #[test]
    fn test_back_color_forms() {
        let solid = BackColor::from(Color::rgb(255, 255, 255));
        assert_eq!(solid.to_script_value().to_script_text(), "'#ffffff'");
        let json = serde_json::to_string(&solid).unwrap();
        assert_eq!(json, "\"#ffffff\"");
    }
}

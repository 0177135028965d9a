use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScriptError;

/// An RGBA color rendered in the CSS text forms Highcharts accepts.
///
/// Fully opaque colors render as `#rrggbb`, anything translucent as
/// `rgba(r, g, b, a)`. Parsing goes through csscolorparser, so named
/// colors, hex, rgb()/rgba() and hsl() all work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// CSS text form, hex when fully opaque
    pub fn to_css_string(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            // Round the alpha to three decimals, the way browsers print it
            let alpha = (self.a as f64 * 1000.0).round() / 1000.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }
}

impl FromStr for Color {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = csscolorparser::parse(s)?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Color {
            r,
            g,
            b,
            a: a as f32 / 255.0,
        })
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_css_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Color::from_str(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_renders_hex() {
        assert_eq!(Color::rgb(70, 132, 238).to_css_string(), "#4684ee");
        assert_eq!(Color::rgb(0, 0, 0).to_css_string(), "#000000");
    }

    #[test]
    fn test_translucent_renders_rgba() {
        assert_eq!(
            Color::rgba(255, 255, 255, 0.5).to_css_string(),
            "rgba(255, 255, 255, 0.5)"
        );
    }

    #[test]
    fn test_parse_hex() {
        let color = Color::from_str("#4572A7").unwrap();
        assert_eq!(color, Color::rgb(0x45, 0x72, 0xa7));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::from_str("white").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_rgba() {
        let color = Color::from_str("rgba(255, 255, 255, 0.25)").unwrap();
        assert_eq!(color.r, 255);
        assert!((color.a - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::from_str("not-a-color").is_err());
    }

    #[test]
    fn test_serde_uses_css_text() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(back, Color::rgb(0, 0, 255));
    }
}

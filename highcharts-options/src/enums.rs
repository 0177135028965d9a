//! Closed token sets of the configuration schema.
//!
//! Each enum renders as a quoted token; invalid tokens are
//! unrepresentable by construction. Token text is carried by strum so
//! serde and the script writer always agree.

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use highcharts_script::{ScriptValue, ToScriptValue};

/// The default series type for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartType {
    Area,
    Arearange,
    Areaspline,
    Areasplinerange,
    Bar,
    Boxplot,
    Bubble,
    Column,
    Columnrange,
    Errorbar,
    Funnel,
    Gauge,
    #[default]
    Line,
    Pie,
    Scatter,
    Spline,
    Waterfall,
}

/// Horizontal alignment of a label or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment of a label or box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Alignment of an axis title along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AxisTitleAlign {
    Low,
    #[default]
    Middle,
    High,
}

/// Dash style for lines. These tokens are the one schema spot written in
/// PascalCase, so no case transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
pub enum DashStyle {
    #[default]
    Solid,
    ShortDash,
    ShortDot,
    ShortDashDot,
    ShortDashDotDot,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
    LongDashDotDot,
}

/// Mouse cursor shown over clickable series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cursor {
    #[default]
    Pointer,
}

/// Point placement on a categorized x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Placement {
    On,
    Between,
}

/// Whether and how to stack the values of each series on top of each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Stacking {
    #[default]
    Normal,
    Percent,
}

/// The type of axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AxisType {
    #[default]
    Linear,
    Logarithmic,
    Datetime,
    Category,
}

/// Dimensions in which mouse-drag zooming is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ZoomType {
    X,
    Y,
    Xy,
}

/// Irregular time unit for `pointInterval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PointIntervalUnit {
    Day,
    Month,
    Year,
}

/// Layout direction of legend items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

/// Easing function used for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnimationEasing {
    Linear,
    #[default]
    Swing,
}

/// Tick placement relative to the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TickPosition {
    Inside,
    #[default]
    Outside,
}

/// Tick placement relative to categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TickmarkPlacement {
    On,
    #[default]
    Between,
}

/// Whether a bubble's value maps to its area or its diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SizeBy {
    #[default]
    Area,
    Width,
}

/// Behavior of a label that flows outside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Overflow {
    #[default]
    Justify,
    None,
}

macro_rules! impl_token_value {
    ($($name:ident),* $(,)?) => {
        $(
            impl ToScriptValue for $name {
                fn to_script_value(&self) -> ScriptValue {
                    ScriptValue::Str(self.as_ref().to_string())
                }
            }
        )*
    };
}

impl_token_value!(
    AnimationEasing,
    AxisTitleAlign,
    AxisType,
    ChartType,
    Cursor,
    DashStyle,
    HorizontalAlign,
    Layout,
    Overflow,
    Placement,
    PointIntervalUnit,
    SizeBy,
    Stacking,
    TickPosition,
    TickmarkPlacement,
    VerticalAlign,
    ZoomType,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_render_quoted() {
        assert_eq!(
            ChartType::Areaspline.to_script_value().to_script_text(),
            "'areaspline'"
        );
        assert_eq!(ZoomType::Xy.to_script_value().to_script_text(), "'xy'");
    }

    #[test]
    fn test_dash_style_keeps_pascal_case() {
        assert_eq!(DashStyle::ShortDashDot.as_ref(), "ShortDashDot");
        assert_eq!(
            serde_json::to_string(&DashStyle::LongDash).unwrap(),
            "\"LongDash\""
        );
    }

    #[test]
    fn test_serde_and_script_tokens_agree() {
        let json = serde_json::to_string(&HorizontalAlign::Center).unwrap();
        assert_eq!(json, format!("\"{}\"", HorizontalAlign::Center.as_ref()));
    }
}

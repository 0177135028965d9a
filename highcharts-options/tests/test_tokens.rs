//! Token text of the closed enumerations, checked against both output
//! paths.

use rstest::rstest;

use highcharts_options::enums::{
    AxisType, ChartType, DashStyle, HorizontalAlign, Layout, Placement, Stacking, VerticalAlign,
    ZoomType,
};
use highcharts_script::ToScriptValue;

#[rstest]
#[case(ChartType::Area, "area")]
#[case(ChartType::Arearange, "arearange")]
#[case(ChartType::Areaspline, "areaspline")]
#[case(ChartType::Areasplinerange, "areasplinerange")]
#[case(ChartType::Bar, "bar")]
#[case(ChartType::Boxplot, "boxplot")]
#[case(ChartType::Bubble, "bubble")]
#[case(ChartType::Column, "column")]
#[case(ChartType::Columnrange, "columnrange")]
#[case(ChartType::Errorbar, "errorbar")]
#[case(ChartType::Funnel, "funnel")]
#[case(ChartType::Gauge, "gauge")]
#[case(ChartType::Line, "line")]
#[case(ChartType::Pie, "pie")]
#[case(ChartType::Scatter, "scatter")]
#[case(ChartType::Spline, "spline")]
#[case(ChartType::Waterfall, "waterfall")]
fn test_chart_type_tokens(#[case] value: ChartType, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
    assert_eq!(
        value.to_script_value().to_script_text(),
        format!("'{token}'")
    );
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{token}\"")
    );
}

#[rstest]
#[case(DashStyle::Solid, "Solid")]
#[case(DashStyle::ShortDash, "ShortDash")]
#[case(DashStyle::ShortDot, "ShortDot")]
#[case(DashStyle::ShortDashDot, "ShortDashDot")]
#[case(DashStyle::ShortDashDotDot, "ShortDashDotDot")]
#[case(DashStyle::Dot, "Dot")]
#[case(DashStyle::Dash, "Dash")]
#[case(DashStyle::LongDash, "LongDash")]
#[case(DashStyle::DashDot, "DashDot")]
#[case(DashStyle::LongDashDot, "LongDashDot")]
#[case(DashStyle::LongDashDotDot, "LongDashDotDot")]
fn test_dash_style_tokens_stay_pascal_case(#[case] value: DashStyle, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
    assert_eq!(
        value.to_script_value().to_script_text(),
        format!("'{token}'")
    );
}

#[rstest]
#[case(HorizontalAlign::Left, "left")]
#[case(HorizontalAlign::Center, "center")]
#[case(HorizontalAlign::Right, "right")]
fn test_horizontal_align_tokens(#[case] value: HorizontalAlign, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(VerticalAlign::Top, "top")]
#[case(VerticalAlign::Middle, "middle")]
#[case(VerticalAlign::Bottom, "bottom")]
fn test_vertical_align_tokens(#[case] value: VerticalAlign, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(ZoomType::X, "x")]
#[case(ZoomType::Y, "y")]
#[case(ZoomType::Xy, "xy")]
fn test_zoom_type_tokens(#[case] value: ZoomType, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(AxisType::Linear, "linear")]
#[case(AxisType::Logarithmic, "logarithmic")]
#[case(AxisType::Datetime, "datetime")]
#[case(AxisType::Category, "category")]
fn test_axis_type_tokens(#[case] value: AxisType, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(Stacking::Normal, "normal")]
#[case(Stacking::Percent, "percent")]
fn test_stacking_tokens(#[case] value: Stacking, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(Placement::On, "on")]
#[case(Placement::Between, "between")]
fn test_placement_tokens(#[case] value: Placement, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[rstest]
#[case(Layout::Horizontal, "horizontal")]
#[case(Layout::Vertical, "vertical")]
fn test_layout_tokens(#[case] value: Layout, #[case] token: &str) {
    assert_eq!(value.as_ref(), token);
}

#[test]
fn test_defaults_match_schema_defaults() {
    assert_eq!(ChartType::default(), ChartType::Line);
    assert_eq!(HorizontalAlign::default(), HorizontalAlign::Center);
    assert_eq!(VerticalAlign::default(), VerticalAlign::Top);
    assert_eq!(DashStyle::default(), DashStyle::Solid);
    assert_eq!(Layout::default(), Layout::Horizontal);
}

#[test]
fn test_serde_parses_schema_tokens() {
    let value: ChartType = serde_json::from_str("\"errorbar\"").unwrap();
    assert_eq!(value, ChartType::Errorbar);
    let value: DashStyle = serde_json::from_str("\"LongDashDot\"").unwrap();
    assert_eq!(value, DashStyle::LongDashDot);
    assert!(serde_json::from_str::<ChartType>("\"polygon\"").is_err());
}

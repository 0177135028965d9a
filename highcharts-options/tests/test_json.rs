//! Plain JSON import and export through serde, next to the script output.

use highcharts_options::enums::{ChartType, ZoomType};
use highcharts_options::helpers::{Gradient, PercentageOrPixel};
use highcharts_options::{
    Axis, Chart, Color, Data, HoverState, OptionNode, PlotOptionsErrorbar, PlotOptionsLine, Series,
    SeriesPlotOptions, Title, Tooltip,
};
use highcharts_script::{JsFunction, ToScriptValue};

#[test]
fn test_json_uses_schema_names() {
    let title = Title::new().text("Browser shares").use_html(true);
    assert_eq!(
        serde_json::to_string(&title).unwrap(),
        r#"{"text":"Browser shares","useHTML":true}"#
    );
}

#[test]
fn test_unset_fields_are_skipped() {
    assert_eq!(serde_json::to_string(&Chart::new()).unwrap(), "{}");
    assert_eq!(serde_json::to_string(&Tooltip::new()).unwrap(), "{}");
}

#[test]
fn test_whole_numbers_keep_integer_form() {
    let hover = HoverState::new().line_width(2.0).brightness(0.25);
    assert_eq!(
        serde_json::to_string(&hover).unwrap(),
        r#"{"brightness":0.25,"lineWidth":2}"#
    );
}

#[test]
fn test_percentage_or_pixel_json_forms() {
    let percent = PlotOptionsErrorbar::new().whisker_length(PercentageOrPixel::percent(50));
    assert_eq!(
        serde_json::to_string(&percent).unwrap(),
        r#"{"whiskerLength":"50%"}"#
    );

    let pixels = PlotOptionsErrorbar::new().whisker_length(9);
    assert_eq!(
        serde_json::to_string(&pixels).unwrap(),
        r#"{"whiskerLength":9}"#
    );
}

#[test]
fn test_point_start_date_becomes_epoch_millis() {
    let line = PlotOptionsLine::new()
        .point_start(chrono::NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
    assert_eq!(
        serde_json::to_string(&line).unwrap(),
        r#"{"pointStart":1262304000000}"#
    );
}

#[test]
fn test_gradient_json_shape() {
    let gradient = Gradient::new(
        [0.0, 0.0, 0.0, 300.0],
        vec![(0.0, Color::rgb(255, 255, 255)), (1.0, Color::rgb(0, 0, 0))],
    );
    assert_eq!(
        serde_json::to_string(&gradient).unwrap(),
        r##"{"linearGradient":[0,0,0,300],"stops":[[0,"#ffffff"],[1,"#000000"]]}"##
    );
}

#[test]
fn test_function_degrades_to_string_in_json() {
    // JSON has no function type; the script output keeps it verbatim
    let tooltip = Tooltip::new().formatter(JsFunction::new("function() { return this.y; }"));
    assert_eq!(
        serde_json::to_string(&tooltip).unwrap(),
        r#"{"formatter":"function() { return this.y; }"}"#
    );
}

#[test]
fn test_data_is_transparent_in_json() {
    let data = Data::numbers(vec![29.9, 71.5, 106.4]);
    assert_eq!(serde_json::to_string(&data).unwrap(), "[29.9,71.5,106.4]");

    let back: Data = serde_json::from_str("[29.9,[1,71.5],null]").unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(
        back.to_script_value().to_script_text(),
        "[29.9, [1, 71.5], null]"
    );
}

#[test]
fn test_series_json_keeps_plot_options_nested() {
    // The script output splices these inline; plain JSON keeps the key
    let series = Series::new()
        .name("Tokyo")
        .plot_options(PlotOptionsLine::new().line_width(3));
    assert_eq!(
        serde_json::to_string(&series).unwrap(),
        r#"{"name":"Tokyo","plotOptions":{"lineWidth":3}}"#
    );
    assert_eq!(
        series.to_object().to_script_text(),
        "{ name: 'Tokyo', lineWidth: 3 }"
    );
}

#[test]
fn test_series_reads_typed_plot_options_from_json() {
    let series: Series = serde_json::from_str(
        r#"{"name":"Errors","plotOptions":{"whiskerLength":"50%","stemWidth":2}}"#,
    )
    .unwrap();
    assert!(matches!(
        series.plot_options.as_ref(),
        Some(SeriesPlotOptions::Errorbar(_))
    ));
    // The typed fields survive the round trip
    assert_eq!(
        serde_json::to_string(&series).unwrap(),
        r#"{"name":"Errors","plotOptions":{"stemWidth":2,"whiskerLength":"50%"}}"#
    );
}

#[test]
fn test_chart_reads_highcharts_style_json() {
    let chart: Chart = serde_json::from_str(
        r#"{
            "renderTo": "container",
            "type": "spline",
            "marginRight": 130,
            "marginBottom": 25,
            "zoomType": "x"
        }"#,
    )
    .unwrap();
    assert_eq!(chart.render_to.as_deref(), Some("container"));
    assert_eq!(chart.chart_type, Some(ChartType::Spline));
    assert_eq!(chart.margin_right, Some(130.into()));
    assert_eq!(chart.margin_bottom, Some(25.into()));
    assert_eq!(chart.zoom_type, Some(ZoomType::X));
}

#[test]
fn test_unknown_json_keys_are_ignored() {
    let axis: Axis = serde_json::from_str(
        r#"{"categories": ["Jan", "Feb", "Mar"], "futureOption": {"nested": true}}"#,
    )
    .unwrap();
    assert_eq!(
        axis.categories,
        Some(vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()])
    );
}

#[test]
fn test_json_round_trip_preserves_options() {
    let title = Title::new().text("Round trip").x(-20);
    let json = serde_json::to_string(&title).unwrap();
    let back: Title = serde_json::from_str(&json).unwrap();
    assert_eq!(back, title);
}

#[test]
fn test_json_and_script_agree_on_values() {
    let chart = Chart::new().chart_type(ChartType::Column).border_width(1);
    let json: serde_json::Value = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["type"], serde_json::json!("column"));
    assert_eq!(json["borderWidth"], serde_json::json!(1));
    assert_eq!(
        chart.to_object().to_script_text(),
        "{ borderWidth: 1, type: 'column' }"
    );
}

use highcharts::prelude::*;

#[test]
fn test_script_wires_construction_to_dom_ready() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("chart1")?.set_title(Title::new().text("Hi"));
    assert_eq!(
        chart.to_script(),
        "var chart1;\n\
         $(document).ready(function() { chart1 = new Highcharts.Chart({ chart: { renderTo: 'chart1' }, title: { text: 'Hi' } }); });"
    );
    Ok(())
}

#[test]
fn test_in_function_replaces_dom_ready() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("c")?.in_function("drawChart");
    assert_eq!(
        chart.to_script(),
        "var c;\n\
         function drawChart() { c = new Highcharts.Chart({ chart: { renderTo: 'c' } }); }"
    );
    Ok(())
}

#[test]
fn test_variables_and_functions_emit_in_registration_order() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("c")?
        .add_js_variable("categories", vec![ScriptValue::from("Jan"), ScriptValue::from("Feb")])
        .add_js_variable("threshold", 14.5)
        .add_js_function("fmt", &["point"], "return point.y + ' °C';")
        .add_js_function("noop", &[], "return;");
    let script = chart.to_script();
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines[0], "var c;");
    assert_eq!(lines[1], "var categories = ['Jan', 'Feb'];");
    assert_eq!(lines[2], "var threshold = 14.5;");
    assert_eq!(lines[3], "function fmt(point) { return point.y + ' °C'; }");
    assert_eq!(lines[4], "function noop() { return; }");
    assert!(lines[5].starts_with("$(document).ready("));
    Ok(())
}

#[test]
fn test_reregistered_variable_keeps_its_slot() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("c")?
        .add_js_variable("a", 1)
        .add_js_variable("b", 2)
        .add_js_variable("a", 9);
    let script = chart.to_script();
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(lines[1], "var a = 9;");
    assert_eq!(lines[2], "var b = 2;");
    Ok(())
}

#[test]
fn test_set_options_emits_global_set_options_call() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("c")?.set_options(
        GlobalOptions::new()
            .global(Global::new().use_utc(false))
            .lang(Lang::new().decimal_point(",")),
    );
    let script = chart.to_script();
    assert!(
        script.contains(
            "Highcharts.setOptions({ global: { useUTC: false }, lang: { decimalPoint: ',' } });"
        ),
        "setOptions call missing from script:\n{script}"
    );
    // Applied before the chart is constructed
    let set_options_at = script.find("Highcharts.setOptions").unwrap();
    let construction_at = script.find("new Highcharts.Chart").unwrap();
    assert!(set_options_at < construction_at);
    Ok(())
}

#[test]
fn test_html_wraps_container_and_script() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("chart1")?;
    assert_eq!(
        chart.to_html(),
        "<div id=\"chart1\"></div>\n\
         <script type=\"text/javascript\">\n\
         var chart1;\n\
         $(document).ready(function() { chart1 = new Highcharts.Chart({ chart: { renderTo: 'chart1' } }); });\n\
         </script>"
    );
    Ok(())
}

#[test]
fn test_html_container_follows_explicit_render_to() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("chart1")?.init_chart(Chart::new().render_to("holder"));
    assert!(chart.to_html().starts_with("<div id=\"holder\"></div>"));
    Ok(())
}

#[test]
fn test_function_values_survive_into_script() -> Result<(), HighchartsError> {
    let chart = Highcharts::new("c")?.set_tooltip(Tooltip::new().formatter(JsFunction::new(
        "function() { return this.x + ': ' + this.y; }",
    )));
    assert!(chart
        .to_script()
        .contains("tooltip: { formatter: function() { return this.x + ': ' + this.y; } }"));
    Ok(())
}

//! The classic monthly-average-temperature line chart, printed as an
//! embeddable HTML fragment.

use highcharts::prelude::*;

fn main() -> Result<(), HighchartsError> {
    tracing_subscriber::fmt::init();

    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    let chart = Highcharts::new("chart")?
        .init_chart(
            Chart::new()
                .chart_type(ChartType::Line)
                .margin_right(130)
                .margin_bottom(25),
        )
        .set_title(Title::new().text("Monthly Average Temperature").x(-20))
        .set_subtitle(Subtitle::new().text("Source: WorldClimate.com").x(-20))
        .set_x_axis(Axis::new().categories(months.map(String::from).to_vec()))
        .set_y_axis(
            Axis::new()
                .title(AxisTitle::new().text("Temperature (°C)"))
                .plot_lines(vec![PlotLine::new()
                    .value(0)
                    .width(1)
                    .color(Color::rgb(0x80, 0x80, 0x80))]),
        )
        .set_tooltip(Tooltip::new().formatter(JsFunction::new(
            "function() { return '<b>' + this.series.name + '</b><br/>' + this.x + ': ' + this.y + '°C'; }",
        )))
        .set_legend(
            Legend::new()
                .layout(Layout::Vertical)
                .align(HorizontalAlign::Right)
                .vertical_align(VerticalAlign::Top)
                .x(-10)
                .y(100)
                .border_width(0),
        )
        .set_series_list(vec![
            Series::new().name("Tokyo").data(Data::numbers(vec![
                7.0, 6.9, 9.5, 14.5, 18.2, 21.5, 25.2, 26.5, 23.3, 18.3, 13.9, 9.6,
            ])),
            Series::new().name("New York").data(Data::numbers(vec![
                -0.2, 0.8, 5.7, 11.3, 17.0, 22.0, 24.8, 24.1, 20.1, 14.1, 8.6, 2.5,
            ])),
            Series::new().name("Berlin").data(Data::numbers(vec![
                -0.9, 0.6, 3.5, 8.4, 13.5, 17.0, 18.6, 17.9, 14.3, 9.0, 3.9, 1.0,
            ])),
            Series::new().name("London").data(Data::numbers(vec![
                3.9, 4.2, 5.7, 8.5, 11.9, 15.2, 17.0, 16.6, 14.2, 10.3, 6.6, 4.8,
            ])),
        ]);

    println!("{}", chart.to_html());
    Ok(())
}

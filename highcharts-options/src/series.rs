//! The series array entries and their data.

use serde::{Deserialize, Deserializer, Serialize};

use highcharts_script::{Color, Format, Number, ScriptValue, ToScriptValue};

use crate::data_labels::DataLabels;
use crate::enums::ChartType;
use crate::events::PointEvents;
use crate::marker::Marker;
use crate::plot_options::{
    PlotOptionsArea, PlotOptionsBar, PlotOptionsBubble, PlotOptionsColumn, PlotOptionsErrorbar,
    PlotOptionsLine, PlotOptionsPie, PlotOptionsScatter, PlotOptionsSeries, PlotOptionsSpline,
};

/// The data array of a series.
///
/// Elements can be plain y values, `[x, y]` pairs, nulls for gaps, or
/// full point objects; Highcharts accepts them mixed. The order is the
/// drawing order and is preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Data {
    values: Vec<ScriptValue>,
}

impl Data {
    pub fn new(values: Vec<ScriptValue>) -> Self {
        Data { values }
    }

    /// Plain y values
    pub fn numbers<I, N>(values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        Data {
            values: values
                .into_iter()
                .map(|value| ScriptValue::Number(value.into()))
                .collect(),
        }
    }

    /// Plain y values with `None` rendering as null gaps
    pub fn numbers_opt<I, N>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<N>>,
        N: Into<Number>,
    {
        Data {
            values: values
                .into_iter()
                .map(|value| match value {
                    Some(value) => ScriptValue::Number(value.into()),
                    None => ScriptValue::Null,
                })
                .collect(),
        }
    }

    /// `[x, y]` pairs
    pub fn pairs<I, A, B>(values: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<ScriptValue>,
        B: Into<ScriptValue>,
    {
        Data {
            values: values.into_iter().map(ScriptValue::from).collect(),
        }
    }

    /// Full point objects
    pub fn points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Data {
            values: points.into_iter().map(ScriptValue::from).collect(),
        }
    }

    pub fn values(&self) -> &[ScriptValue] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// JSON arrays become elements; any other JSON value becomes a
/// single-element data array.
impl From<serde_json::Value> for Data {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => Data {
                values: items.into_iter().map(ScriptValue::from).collect(),
            },
            other => Data {
                values: vec![ScriptValue::from(other)],
            },
        }
    }
}

impl ToScriptValue for Data {
    fn to_script_value(&self) -> ScriptValue {
        ScriptValue::Array(self.values.clone())
    }
}

options! {
    /// A single point of a series, the object form of a data element.
    pub struct Point {
        /// Individual color for the point.
        color: Color => "color",
        /// Individual data label for the point.
        data_labels: DataLabels => "dataLabels",
        /// Event listeners for the point.
        events: PointEvents => "events",
        /// An id for the point, usable with chart.get().
        id: String => "id",
        /// The sequential index of the point in the legend. Pies only.
        legend_index: Number => "legendIndex",
        /// Options for the point markers.
        marker: Marker => "marker",
        /// The name of the point as shown in the legend, tooltip or
        /// data label.
        name: String => "name",
        /// Whether the point is selected initially. Default: false
        selected: bool => "selected",
        /// Pie series only. Whether to display a slice offset from the
        /// center. Default: false
        sliced: bool => "sliced",
        /// The x value of the point.
        x: Number => "x",
        /// The y value of the point.
        y: Number => "y",
    }
}

/// Per-series overrides of the plot options for the series' type.
///
/// These are written inline into the series object in the script output,
/// exactly as Highcharts reads them. When parsing from JSON the variant
/// is picked by the type-specific keys present; an object carrying only
/// shared keys parses into the generic [`SeriesPlotOptions::Series`]
/// variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesPlotOptions {
    Area(PlotOptionsArea),
    Bar(PlotOptionsBar),
    Bubble(PlotOptionsBubble),
    Column(PlotOptionsColumn),
    Errorbar(PlotOptionsErrorbar),
    Line(PlotOptionsLine),
    Pie(PlotOptionsPie),
    Scatter(PlotOptionsScatter),
    Series(PlotOptionsSeries),
    Spline(PlotOptionsSpline),
}

// Keys carried by only one series type's options. JSON plot options do
// not name their series type, so these pick the variant. Bar, spline
// and scatter options have no key of their own; their JSON parses into
// the column, line and generic variants, which serialize identically.
const ERRORBAR_KEYS: &[&str] = &[
    "stemColor",
    "stemDashStyle",
    "stemWidth",
    "whiskerColor",
    "whiskerLength",
    "whiskerWidth",
];
const BUBBLE_KEYS: &[&str] = &[
    "displayNegative",
    "maxSize",
    "minSize",
    "sizeBy",
    "zMax",
    "zMin",
    "zThreshold",
];
const PIE_KEYS: &[&str] = &[
    "center",
    "endAngle",
    "ignoreHiddenPoint",
    "innerSize",
    "size",
    "slicedOffset",
    "startAngle",
];
const AREA_KEYS: &[&str] = &["fillColor", "fillOpacity", "lineColor", "trackByArea"];
const COLUMN_KEYS: &[&str] = &[
    "borderColor",
    "borderRadius",
    "borderWidth",
    "colorByPoint",
    "colors",
    "groupPadding",
    "grouping",
    "minPointLength",
    "pointPadding",
    "pointRange",
    "pointWidth",
];

fn has_any(value: &serde_json::Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| value.get(key).is_some())
}

impl<'de> Deserialize<'de> for SeriesPlotOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(D::Error::custom("plot options must be a JSON object"));
        }
        let parsed = if has_any(&value, ERRORBAR_KEYS) {
            serde_json::from_value(value).map(SeriesPlotOptions::Errorbar)
        } else if has_any(&value, BUBBLE_KEYS) {
            serde_json::from_value(value).map(SeriesPlotOptions::Bubble)
        } else if has_any(&value, PIE_KEYS) {
            serde_json::from_value(value).map(SeriesPlotOptions::Pie)
        } else if has_any(&value, AREA_KEYS) {
            serde_json::from_value(value).map(SeriesPlotOptions::Area)
        } else if has_any(&value, COLUMN_KEYS) {
            serde_json::from_value(value).map(SeriesPlotOptions::Column)
        } else if value.get("step").is_some() {
            serde_json::from_value(value).map(SeriesPlotOptions::Line)
        } else {
            serde_json::from_value(value).map(SeriesPlotOptions::Series)
        };
        parsed.map_err(D::Error::custom)
    }
}

impl ToScriptValue for SeriesPlotOptions {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            SeriesPlotOptions::Area(options) => options.to_script_value(),
            SeriesPlotOptions::Bar(options) => options.to_script_value(),
            SeriesPlotOptions::Bubble(options) => options.to_script_value(),
            SeriesPlotOptions::Column(options) => options.to_script_value(),
            SeriesPlotOptions::Errorbar(options) => options.to_script_value(),
            SeriesPlotOptions::Line(options) => options.to_script_value(),
            SeriesPlotOptions::Pie(options) => options.to_script_value(),
            SeriesPlotOptions::Scatter(options) => options.to_script_value(),
            SeriesPlotOptions::Series(options) => options.to_script_value(),
            SeriesPlotOptions::Spline(options) => options.to_script_value(),
        }
    }
}

impl From<PlotOptionsArea> for SeriesPlotOptions {
    fn from(options: PlotOptionsArea) -> Self {
        SeriesPlotOptions::Area(options)
    }
}

impl From<PlotOptionsBar> for SeriesPlotOptions {
    fn from(options: PlotOptionsBar) -> Self {
        SeriesPlotOptions::Bar(options)
    }
}

impl From<PlotOptionsBubble> for SeriesPlotOptions {
    fn from(options: PlotOptionsBubble) -> Self {
        SeriesPlotOptions::Bubble(options)
    }
}

impl From<PlotOptionsColumn> for SeriesPlotOptions {
    fn from(options: PlotOptionsColumn) -> Self {
        SeriesPlotOptions::Column(options)
    }
}

impl From<PlotOptionsErrorbar> for SeriesPlotOptions {
    fn from(options: PlotOptionsErrorbar) -> Self {
        SeriesPlotOptions::Errorbar(options)
    }
}

impl From<PlotOptionsLine> for SeriesPlotOptions {
    fn from(options: PlotOptionsLine) -> Self {
        SeriesPlotOptions::Line(options)
    }
}

impl From<PlotOptionsPie> for SeriesPlotOptions {
    fn from(options: PlotOptionsPie) -> Self {
        SeriesPlotOptions::Pie(options)
    }
}

impl From<PlotOptionsScatter> for SeriesPlotOptions {
    fn from(options: PlotOptionsScatter) -> Self {
        SeriesPlotOptions::Scatter(options)
    }
}

impl From<PlotOptionsSeries> for SeriesPlotOptions {
    fn from(options: PlotOptionsSeries) -> Self {
        SeriesPlotOptions::Series(options)
    }
}

impl From<PlotOptionsSpline> for SeriesPlotOptions {
    fn from(options: PlotOptionsSpline) -> Self {
        SeriesPlotOptions::Spline(options)
    }
}

options! {
    /// One entry of the series array: the data and the options applying
    /// to it.
    ///
    /// The per-series plot options are spliced inline into this object in
    /// the script output. When exporting plain JSON through serde they
    /// stay nested under a `plotOptions` key; use
    /// [`ToScriptValue::to_script_value`] first when the inline form is
    /// needed in JSON as well.
    pub struct Series {
        /// The main color of the series.
        color: Color => "color",
        /// The data array of the series.
        data: Data => "data",
        /// An id for the series, usable with chart.get().
        id: String => "id",
        /// The index of the series in the chart, affecting the internal
        /// index in the chart.series array, the visible z index and the
        /// order in the legend.
        index: Number => "index",
        /// The sequential index of the series in the legend.
        legend_index: Number => "legendIndex",
        /// The name of the series as shown in the legend and tooltip.
        name: String => "name",
        /// Per-series overrides of the plot options for this series'
        /// type.
        plot_options: SeriesPlotOptions => "plotOptions" as Format::BareUnbraced,
        /// This option allows grouping series in a stacked chart.
        stack: String => "stack",
        /// The type of series. Defaults to the chart's default series
        /// type.
        series_type: ChartType => "type",
        /// The index of the x axis this series is connected to.
        /// Default: 0
        x_axis: Number => "xAxis",
        /// The index of the y axis this series is connected to.
        /// Default: 0
        y_axis: Number => "yAxis",
        /// The visible z index of the series.
        z_index: Number => "zIndex",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highcharts_script::OptionNode;

    #[test]
    fn test_numbers_with_gaps() {
        let data = Data::numbers_opt(vec![Some(1), None, Some(3)]);
        assert_eq!(data.to_script_value().to_script_text(), "[1, null, 3]");
    }

    #[test]
    fn test_pairs_render_as_point_arrays() {
        let data = Data::pairs(vec![(0, 7.0), (1, 6.9)]);
        assert_eq!(data.to_script_value().to_script_text(), "[[0, 7], [1, 6.9]]");
    }

    #[test]
    fn test_point_objects() {
        let data = Data::points(vec![
            Point::new().name("Firefox").y(45.0),
            Point::new().name("IE").y(26.8).sliced(true).selected(true),
        ]);
        assert_eq!(
            data.to_script_value().to_script_text(),
            "[{ name: 'Firefox', y: 45 }, { name: 'IE', selected: true, sliced: true, y: 26.8 }]"
        );
    }

    #[test]
    fn test_data_from_json() {
        let data = Data::from(serde_json::json!([1, [2, 5], null]));
        assert_eq!(data.to_script_value().to_script_text(), "[1, [2, 5], null]");
    }

    #[test]
    fn test_series_plot_options_splice_between_neighbors() {
        let series = Series::new()
            .name("Observations")
            .plot_options(PlotOptionsErrorbar::new().whisker_length(
                crate::helpers::PercentageOrPixel::percent(50),
            ))
            .series_type(ChartType::Errorbar);
        assert_eq!(
            series.to_object().to_script_text(),
            "{ name: 'Observations', whiskerLength: '50%', type: 'errorbar' }"
        );
    }

    #[test]
    fn test_series_with_empty_plot_options_leaves_no_artifacts() {
        let series = Series::new()
            .name("A")
            .plot_options(PlotOptionsLine::new())
            .z_index(1);
        assert_eq!(
            series.to_object().to_script_text(),
            "{ name: 'A', zIndex: 1 }"
        );
    }

    #[test]
    fn test_series_data_and_name() {
        let series = Series::new().data(Data::numbers(vec![7, 6, 9])).name("Tokyo");
        assert_eq!(
            series.to_object().to_script_text(),
            "{ data: [7, 6, 9], name: 'Tokyo' }"
        );
    }

    #[test]
    fn test_plot_options_json_picks_typed_variant() {
        let parsed: SeriesPlotOptions =
            serde_json::from_str(r#"{"whiskerLength":"50%","stemWidth":2}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Errorbar(_)));

        let parsed: SeriesPlotOptions = serde_json::from_str(r#"{"zMin":0,"zMax":100}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Bubble(_)));

        let parsed: SeriesPlotOptions = serde_json::from_str(r#"{"innerSize":"40%"}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Pie(_)));

        let parsed: SeriesPlotOptions = serde_json::from_str(r#"{"fillOpacity":0.75}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Area(_)));

        let parsed: SeriesPlotOptions =
            serde_json::from_str(r#"{"borderWidth":0,"grouping":false}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Column(_)));

        let parsed: SeriesPlotOptions = serde_json::from_str(r#"{"step":true}"#).unwrap();
        assert!(matches!(parsed, SeriesPlotOptions::Line(_)));
    }

    #[test]
    fn test_plot_options_json_shared_keys_parse_generic() {
        let parsed: SeriesPlotOptions = serde_json::from_str(r#"{"lineWidth":3}"#).unwrap();
        match parsed {
            SeriesPlotOptions::Series(options) => {
                assert_eq!(options.line_width, Some(3.into()));
            }
            other => panic!("expected generic series options, got {other:?}"),
        }
    }

    #[test]
    fn test_plot_options_json_rejects_non_objects() {
        assert!(serde_json::from_str::<SeriesPlotOptions>("7").is_err());
        assert!(serde_json::from_str::<SeriesPlotOptions>(r#""line""#).is_err());
    }
}

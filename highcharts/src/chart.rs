//! Chart assembly.
//!
//! One [`Highcharts`] value collects the typed option nodes for a single
//! chart together with the page-level JavaScript around it: named
//! variables, helper functions, and the global options applied through
//! `Highcharts.setOptions`.

use indexmap::IndexMap;

use highcharts_options::{
    Axis, Chart, Credits, Exporting, Global, Labels, Lang, Legend, Loading, Navigation, Pane,
    PlotOptions, Series, Subtitle, Title, Tooltip,
};
use highcharts_script::{Color, OptionNode, ScriptObject, ScriptValue, ToScriptValue};

use crate::error::HighchartsError;

/// Global and language options applied through `Highcharts.setOptions`
/// before the chart is constructed. These affect every chart on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalOptions {
    pub global: Option<Global>,
    pub lang: Option<Lang>,
}

impl GlobalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global(mut self, global: Global) -> Self {
        self.global = Some(global);
        self
    }

    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }
}

impl OptionNode for GlobalOptions {
    fn to_object(&self) -> ScriptObject {
        let mut object = ScriptObject::new();
        if let Some(global) = &self.global {
            object.push_value("global", global.to_script_value());
        }
        if let Some(lang) = &self.lang {
            object.push_value("lang", lang.to_script_value());
        }
        object
    }
}

/// An axis slot holds either one axis or a list; the schema accepts an
/// object in the first case and an array in the second.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AxisSlot {
    Single(Box<Axis>),
    List(Vec<Axis>),
}

impl AxisSlot {
    fn to_script_value(&self) -> ScriptValue {
        match self {
            AxisSlot::Single(axis) => axis.to_script_value(),
            AxisSlot::List(axes) => {
                ScriptValue::Array(axes.iter().map(|axis| axis.to_script_value()).collect())
            }
        }
    }
}

/// A helper function registered on the chart, emitted ahead of the chart
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FunctionDef {
    pub(crate) params: Vec<String>,
    pub(crate) body: String,
}

/// One chart under assembly.
///
/// The chart name doubles as the JavaScript variable holding the chart
/// instance and, unless the chart node sets `renderTo` itself, as the id
/// of the container element.
#[derive(Debug, Clone)]
pub struct Highcharts {
    pub(crate) name: String,
    pub(crate) chart: Option<Chart>,
    pub(crate) colors: Option<Vec<Color>>,
    pub(crate) credits: Option<Credits>,
    pub(crate) labels: Option<Labels>,
    pub(crate) legend: Option<Legend>,
    pub(crate) loading: Option<Loading>,
    pub(crate) navigation: Option<Navigation>,
    pub(crate) pane: Option<Pane>,
    pub(crate) plot_options: Option<PlotOptions>,
    pub(crate) series: Vec<Series>,
    pub(crate) subtitle: Option<Subtitle>,
    pub(crate) title: Option<Title>,
    pub(crate) tooltip: Option<Tooltip>,
    pub(crate) x_axis: Option<AxisSlot>,
    pub(crate) y_axis: Option<AxisSlot>,
    pub(crate) exporting: Option<Exporting>,
    pub(crate) options: Option<GlobalOptions>,
    pub(crate) variables: IndexMap<String, ScriptValue>,
    pub(crate) functions: IndexMap<String, FunctionDef>,
    pub(crate) function_name: Option<String>,
}

impl Highcharts {
    /// Start a chart under the given name. The name becomes a JavaScript
    /// variable, so it must be a valid identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, HighchartsError> {
        let name = name.into();
        if !is_js_identifier(&name) {
            return Err(HighchartsError::InvalidChartName { name });
        }
        Ok(Highcharts {
            name,
            chart: None,
            colors: None,
            credits: None,
            labels: None,
            legend: None,
            loading: None,
            navigation: None,
            pane: None,
            plot_options: None,
            series: Vec::new(),
            subtitle: None,
            title: None,
            tooltip: None,
            x_axis: None,
            y_axis: None,
            exporting: None,
            options: None,
            variables: IndexMap::new(),
            functions: IndexMap::new(),
            function_name: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id of the container element: the chart node's `renderTo` when
    /// set, the chart name otherwise.
    pub fn container_id(&self) -> &str {
        self.chart
            .as_ref()
            .and_then(|chart| chart.render_to.as_deref())
            .unwrap_or(&self.name)
    }

    pub fn init_chart(mut self, chart: Chart) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn set_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn set_subtitle(mut self, subtitle: Subtitle) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn set_credits(mut self, credits: Credits) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn set_labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn set_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn set_loading(mut self, loading: Loading) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn set_navigation(mut self, navigation: Navigation) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn set_exporting(mut self, exporting: Exporting) -> Self {
        self.exporting = Some(exporting);
        self
    }

    pub fn set_pane(mut self, pane: Pane) -> Self {
        self.pane = Some(pane);
        self
    }

    pub fn set_plot_options(mut self, plot_options: PlotOptions) -> Self {
        self.plot_options = Some(plot_options);
        self
    }

    pub fn set_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// The default colors for the chart's series, cycled in order.
    pub fn set_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn set_x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(AxisSlot::Single(Box::new(axis)));
        self
    }

    pub fn set_x_axes(mut self, axes: Vec<Axis>) -> Self {
        self.x_axis = Some(AxisSlot::List(axes));
        self
    }

    pub fn set_y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(AxisSlot::Single(Box::new(axis)));
        self
    }

    pub fn set_y_axes(mut self, axes: Vec<Axis>) -> Self {
        self.y_axis = Some(AxisSlot::List(axes));
        self
    }

    /// Replace the series list with a single series. It still renders as
    /// a one-element array, as the schema requires.
    pub fn set_series(mut self, series: Series) -> Self {
        self.series = vec![series];
        self
    }

    pub fn set_series_list(mut self, series: Vec<Series>) -> Self {
        self.series = series;
        self
    }

    /// Options applied through `Highcharts.setOptions` ahead of the chart
    /// construction.
    pub fn set_options(mut self, options: GlobalOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Register a page-level variable, emitted as `var name = value;`
    /// before the chart script. Registration order is emission order;
    /// re-registering a name overwrites its value in place.
    pub fn add_js_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<ScriptValue>,
    ) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Register a helper function, emitted as a function declaration
    /// before the chart script.
    pub fn add_js_function(
        mut self,
        name: impl Into<String>,
        params: &[&str],
        body: impl Into<String>,
    ) -> Self {
        self.functions.insert(
            name.into(),
            FunctionDef {
                params: params.iter().map(|param| param.to_string()).collect(),
                body: body.into(),
            },
        );
        self
    }

    /// Wrap the chart construction in a named function instead of the
    /// default `$(document).ready` handler, leaving the caller to invoke
    /// it.
    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function_name = Some(name.into());
        self
    }

    /// Assemble the top-level configuration object.
    ///
    /// Slots appear in a fixed order: chart, colors, credits, labels,
    /// legend, loading, navigation, pane, plotOptions, series, subtitle,
    /// title, tooltip, xAxis, yAxis, exporting. The chart slot is always
    /// present, with `renderTo` defaulting to the chart name.
    pub fn options_object(&self) -> ScriptObject {
        let mut object = ScriptObject::new();

        let mut chart = self.chart.clone().unwrap_or_default();
        if chart.render_to.is_none() {
            chart.render_to = Some(self.name.clone());
        }
        object.push_value("chart", chart.to_script_value());

        if let Some(colors) = &self.colors {
            object.push_value(
                "colors",
                ScriptValue::Array(colors.iter().map(|color| color.to_script_value()).collect()),
            );
        }
        if let Some(credits) = &self.credits {
            object.push_value("credits", credits.to_script_value());
        }
        if let Some(labels) = &self.labels {
            object.push_value("labels", labels.to_script_value());
        }
        if let Some(legend) = &self.legend {
            object.push_value("legend", legend.to_script_value());
        }
        if let Some(loading) = &self.loading {
            object.push_value("loading", loading.to_script_value());
        }
        if let Some(navigation) = &self.navigation {
            object.push_value("navigation", navigation.to_script_value());
        }
        if let Some(pane) = &self.pane {
            object.push_value("pane", pane.to_script_value());
        }
        if let Some(plot_options) = &self.plot_options {
            object.push_value("plotOptions", plot_options.to_script_value());
        }
        if !self.series.is_empty() {
            object.push_value(
                "series",
                ScriptValue::Array(
                    self.series
                        .iter()
                        .map(|series| series.to_script_value())
                        .collect(),
                ),
            );
        }
        if let Some(subtitle) = &self.subtitle {
            object.push_value("subtitle", subtitle.to_script_value());
        }
        if let Some(title) = &self.title {
            object.push_value("title", title.to_script_value());
        }
        if let Some(tooltip) = &self.tooltip {
            object.push_value("tooltip", tooltip.to_script_value());
        }
        if let Some(axis) = &self.x_axis {
            object.push_value("xAxis", axis.to_script_value());
        }
        if let Some(axis) = &self.y_axis {
            object.push_value("yAxis", axis.to_script_value());
        }
        if let Some(exporting) = &self.exporting {
            object.push_value("exporting", exporting.to_script_value());
        }

        object
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

//! Script and HTML emission for an assembled chart.
//!
//! The emitted script declares the chart variable, then any registered
//! variables and functions, applies global options when present, and
//! finally constructs the chart inside a `$(document).ready` handler (or
//! inside the function named through `in_function`).

use itertools::Itertools;

use highcharts_script::OptionNode;

use crate::chart::Highcharts;

impl Highcharts {
    /// The configuration object literal passed to `new Highcharts.Chart`.
    pub fn to_options_script(&self) -> String {
        self.options_object().to_script_text()
    }

    /// The full page script for the chart, without the `<script>` tags.
    #[tracing::instrument(skip_all, fields(chart = %self.name))]
    pub fn to_script(&self) -> String {
        let mut lines = vec![format!("var {};", self.name)];

        for (name, value) in &self.variables {
            lines.push(format!("var {} = {};", name, value.to_script_text()));
        }
        for (name, function) in &self.functions {
            lines.push(format!(
                "function {}({}) {{ {} }}",
                name,
                function.params.iter().join(", "),
                function.body
            ));
        }
        if let Some(options) = &self.options {
            lines.push(format!(
                "Highcharts.setOptions({});",
                options.to_object().to_script_text()
            ));
        }

        let construction = format!(
            "{} = new Highcharts.Chart({});",
            self.name,
            self.to_options_script()
        );
        match &self.function_name {
            Some(function) => lines.push(format!("function {function}() {{ {construction} }}")),
            None => {
                lines.push(format!(
                    "$(document).ready(function() {{ {construction} }});"
                ));
            }
        }

        tracing::debug!(
            series = self.series.len(),
            variables = self.variables.len(),
            functions = self.functions.len(),
            "emitted chart script"
        );
        lines.join("\n")
    }

    /// The container `<div>` plus the chart script in a `<script>`
    /// element, ready to embed in a page.
    #[tracing::instrument(skip_all, fields(chart = %self.name))]
    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\"></div>\n<script type=\"text/javascript\">\n{}\n</script>",
            self.container_id(),
            self.to_script()
        )
    }
}

use highcharts_script::Format;

options! {
    /// A free-form HTML label positioned over the chart.
    pub struct LabelsItem {
        /// Inner HTML or text for the label.
        html: String => "html",
        /// CSS styles for the label, most commonly `left` and `top` to
        /// position it.
        style: String => "style" as Format::Templated("{ {} }"),
    }
}

options! {
    /// HTML labels that can be positioned anywhere in the chart area.
    pub struct Labels {
        /// The label items.
        items: Vec<LabelsItem> => "items",
        /// Shared CSS styles for all labels. Default: { "color": "#3E576F" }
        style: String => "style" as Format::Templated("{ {} }"),
    }
}

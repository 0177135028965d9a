use highcharts_script::Format;

options! {
    /// Options for the export menu appearance.
    pub struct Navigation {
        /// CSS styles for the hover state of the individual items within
        /// the popup menu. Default: { "background": "#4572A5", "color": "#FFFFFF" }
        menu_item_hover_style: String => "menuItemHoverStyle" as Format::Templated("{ {} }"),
        /// CSS styles for the individual items within the popup menu.
        /// Default: { "padding": "0 5px", "background": "none", "color": "#303030" }
        menu_item_style: String => "menuItemStyle" as Format::Templated("{ {} }"),
        /// CSS styles for the popup menu appearing by default when the
        /// export icon is clicked.
        /// Default: { "border": "1px solid #A0A0A0", "background": "#FFFFFF" }
        menu_style: String => "menuStyle" as Format::Templated("{ {} }"),
    }
}

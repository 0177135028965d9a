use highcharts_script::{Color, Format, JsFunction, Number};

use crate::enums::{HorizontalAlign, Layout, VerticalAlign};
use crate::helpers::{Animation, BackColor, Shadow};

options! {
    /// Paging controls shown when the legend overflows its height.
    pub struct LegendNavigation {
        /// The color for the active up or down arrow. Default: #3E576F
        active_color: Color => "activeColor",
        /// How to animate the pages when navigating up or down. Default: true
        animation: Animation => "animation",
        /// The pixel size of the up and down arrows. Default: 12
        arrow_size: Number => "arrowSize",
        /// The color of the inactive up or down arrow. Default: #CCC
        inactive_color: Color => "inactiveColor",
        /// Text styles for the legend page navigation.
        style: String => "style" as Format::Templated("{ {} }"),
    }
}

options! {
    /// A title to be added on top of the legend.
    pub struct LegendTitle {
        /// CSS styles for the title. Default: {"fontWeight":"bold"}
        style: String => "style" as Format::Templated("{ {} }"),
        /// A text or HTML string for the title. Default: null
        text: String => "text",
    }
}

options! {
    /// The legend, the box containing the symbol and name for each series
    /// or point item.
    pub struct Legend {
        /// The horizontal alignment of the legend box within the chart
        /// area. Default: center
        align: HorizontalAlign => "align",
        /// The background color of the legend.
        background_color: BackColor => "backgroundColor",
        /// The color of the drawn border around the legend. Default: #909090
        border_color: Color => "borderColor",
        /// The border corner radius of the legend. Default: 5
        border_radius: Number => "borderRadius",
        /// The width of the drawn border around the legend. Default: 1
        border_width: Number => "borderWidth",
        /// Enable or disable the legend. Default: true
        enabled: bool => "enabled",
        /// When the legend is floating, the plot area ignores it and is
        /// allowed to be placed below it. Default: false
        floating: bool => "floating",
        /// CSS styles for each legend item when the corresponding series
        /// or point is hidden.
        item_hidden_style: String => "itemHiddenStyle" as Format::Templated("{ {} }"),
        /// CSS styles for each legend item in hover mode.
        item_hover_style: String => "itemHoverStyle" as Format::Templated("{ {} }"),
        /// The pixel bottom margin for each legend item. Default: 0
        item_margin_bottom: Number => "itemMarginBottom",
        /// The pixel top margin for each legend item. Default: 0
        item_margin_top: Number => "itemMarginTop",
        /// CSS styles for each legend item.
        item_style: String => "itemStyle" as Format::Templated("{ {} }"),
        /// The width for each legend item, useful for arranging items in
        /// columns. Default: null
        item_width: Number => "itemWidth",
        /// Callback function to format each of the series' labels.
        label_formatter: JsFunction => "labelFormatter",
        /// The layout of the legend items. Default: horizontal
        layout: Layout => "layout",
        /// If the plot area sized is calculated automatically and the
        /// legend is not floating, the legend margin is the space between
        /// the legend and the axis labels or plot area. Default: 15
        margin: Number => "margin",
        /// Maximum pixel height for the legend; navigation appears when
        /// it overflows.
        max_height: Number => "maxHeight",
        /// Paging options when the legend overflows.
        navigation: LegendNavigation => "navigation",
        /// The inner padding of the legend box. Default: 8
        padding: Number => "padding",
        /// Whether to reverse the order of the legend items compared to
        /// the order of the series or points. Default: false
        reversed: bool => "reversed",
        /// Whether to show the symbol on the right side of the text
        /// rather than the left side, for right-to-left scripts.
        /// Default: false
        rtl: bool => "rtl",
        /// Whether to apply a drop shadow to the legend. Default: false
        shadow: Shadow => "shadow",
        /// The pixel padding between the legend item symbol and the item
        /// text. Default: 5
        symbol_padding: Number => "symbolPadding",
        /// The pixel width of the legend item symbol. Default: 30
        symbol_width: Number => "symbolWidth",
        /// A title to be added on top of the legend.
        title: LegendTitle => "title",
        /// Whether to use HTML to render the legend item texts.
        /// Default: false
        use_html: bool => "useHTML",
        /// The vertical alignment of the legend box. Default: bottom
        vertical_align: VerticalAlign => "verticalAlign",
        /// The width of the legend box. Default: null
        width: Number => "width",
        /// The x offset of the legend relative to its horizontal
        /// alignment. Default: 0
        x: Number => "x",
        /// The y offset of the legend relative to its vertical alignment.
        /// Default: 0
        y: Number => "y",
    }
}

use highcharts_script::JsFunction;

options! {
    /// Event listeners for a series, each a JavaScript function.
    pub struct SeriesEvents {
        /// Fires after the series has finished its initial animation.
        after_animate: JsFunction => "afterAnimate",
        /// Fires when the checkbox next to the series' name in the legend
        /// is clicked.
        checkbox_click: JsFunction => "checkboxClick",
        /// Fires when the series is clicked.
        click: JsFunction => "click",
        /// Fires when the series is hidden after chart generation time.
        hide: JsFunction => "hide",
        /// Fires when the legend item belonging to the series is clicked.
        legend_item_click: JsFunction => "legendItemClick",
        /// Fires when the mouse leaves the graph.
        mouse_out: JsFunction => "mouseOut",
        /// Fires when the mouse enters the graph.
        mouse_over: JsFunction => "mouseOver",
        /// Fires when the series is shown after chart generation time.
        show: JsFunction => "show",
    }
}

options! {
    /// Event listeners for a point, each a JavaScript function.
    pub struct PointEvents {
        /// Fires when a point is clicked.
        click: JsFunction => "click",
        /// Fires when the mouse leaves the area close to the point.
        mouse_out: JsFunction => "mouseOut",
        /// Fires when the mouse enters the area close to the point.
        mouse_over: JsFunction => "mouseOver",
        /// Fires when the point is removed from the series.
        remove: JsFunction => "remove",
        /// Fires when the point is selected either programmatically or
        /// following a click on the point.
        select: JsFunction => "select",
        /// Fires when the point is unselected either programmatically or
        /// following a click on the point.
        unselect: JsFunction => "unselect",
        /// Fires when the point is updated programmatically through the
        /// update method.
        update: JsFunction => "update",
    }
}

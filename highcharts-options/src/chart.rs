use highcharts_script::{Color, Format, JsFunction, Number};

use crate::enums::{ChartType, ZoomType};
use crate::helpers::{Animation, BackColor, Shadow};

options! {
    /// Event listeners for the chart, each a JavaScript function.
    pub struct ChartEvents {
        /// Fires when a series is added to the chart after load time.
        add_series: JsFunction => "addSeries",
        /// Fires when clicking on the plot background.
        click: JsFunction => "click",
        /// Fires when the chart has finished loading.
        load: JsFunction => "load",
        /// Fires when the chart is redrawn, after resizing or updating.
        redraw: JsFunction => "redraw",
        /// Fires when an area of the chart has been selected.
        selection: JsFunction => "selection",
    }
}

options! {
    /// Options regarding the chart area and plot area as well as general
    /// chart options.
    pub struct Chart {
        /// When using multiple axes, align the thresholds. Default: true
        align_ticks: bool => "alignTicks",
        /// Set the overall animation for all chart updating, or the
        /// animation parameters. Default: true
        animation: Animation => "animation",
        /// The background color or gradient for the outer chart area.
        /// Default: #FFFFFF
        background_color: BackColor => "backgroundColor",
        /// The color of the outer chart border. Default: #4572A7
        border_color: Color => "borderColor",
        /// The corner radius of the outer chart border. Default: 5
        border_radius: Number => "borderRadius",
        /// The pixel width of the outer chart border. Default: 0
        border_width: Number => "borderWidth",
        /// A CSS class name to apply to the charts container div.
        class_name: String => "className",
        /// Event listeners for the chart.
        events: ChartEvents => "events",
        /// An explicit height for the chart. Default: null
        height: Number => "height",
        /// If true, the axes will scale to the remaining visible series
        /// once one series is hidden. Default: true
        ignore_hidden_series: bool => "ignoreHiddenSeries",
        /// Whether to invert the axes so that the x axis is vertical.
        /// Default: false
        inverted: bool => "inverted",
        /// The margin between the outer edge of the chart and the plot
        /// area, as an array of top, right, bottom, left.
        margin: Vec<Number> => "margin",
        /// The margin between the bottom outer edge of the chart and the
        /// plot area. Default: 70
        margin_bottom: Number => "marginBottom",
        /// The margin between the left outer edge of the chart and the
        /// plot area. Default: 80
        margin_left: Number => "marginLeft",
        /// The margin between the right outer edge of the chart and the
        /// plot area. Default: 50
        margin_right: Number => "marginRight",
        /// The margin between the top outer edge of the chart and the
        /// plot area. Default: null
        margin_top: Number => "marginTop",
        /// The background color or gradient for the plot area.
        plot_background_color: BackColor => "plotBackgroundColor",
        /// The URL for an image to use as the plot background.
        plot_background_image: String => "plotBackgroundImage",
        /// The color of the inner chart or plot area border. Default: #C0C0C0
        plot_border_color: Color => "plotBorderColor",
        /// The pixel width of the plot area border. Default: 0
        plot_border_width: Number => "plotBorderWidth",
        /// Whether to apply a drop shadow to the plot area. Default: false
        plot_shadow: Shadow => "plotShadow",
        /// When true, cartesian charts are transformed into the polar
        /// coordinate system. Default: false
        polar: bool => "polar",
        /// Whether to reflow the chart to fit the width of the container
        /// div on resizing the window. Default: true
        reflow: bool => "reflow",
        /// The HTML element where the chart will be rendered. The facade
        /// fills this with the chart name when unset.
        render_to: String => "renderTo",
        /// The background color of the marker square when selecting an
        /// area of the chart by dragging. Default: rgba(69,114,167,0.25)
        selection_marker_fill: Color => "selectionMarkerFill",
        /// Whether to apply a drop shadow to the outer chart area.
        /// Default: false
        shadow: Shadow => "shadow",
        /// Whether to show the axes initially, relevant when the chart is
        /// empty. Default: false
        show_axes: bool => "showAxes",
        /// The space between the bottom edge of the chart and the content.
        /// Default: 15
        spacing_bottom: Number => "spacingBottom",
        /// The space between the left edge of the chart and the content.
        /// Default: 10
        spacing_left: Number => "spacingLeft",
        /// The space between the right edge of the chart and the content.
        /// Default: 10
        spacing_right: Number => "spacingRight",
        /// The space between the top edge of the chart and the content.
        /// Default: 10
        spacing_top: Number => "spacingTop",
        /// Additional CSS styles to apply inline to the container div.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The default series type for the chart. Default: line
        chart_type: ChartType => "type",
        /// An explicit width for the chart. Default: null
        width: Number => "width",
        /// Decides in what dimensions the user can zoom by dragging the
        /// mouse.
        zoom_type: ZoomType => "zoomType",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use highcharts_script::OptionNode;

    #[test]
    fn test_type_renders_under_schema_name() {
        let chart = Chart::new().chart_type(ChartType::Column);
        assert_eq!(chart.to_object().to_script_text(), "{ type: 'column' }");
    }

    #[test]
    fn test_animation_accepts_both_forms() {
        let chart = Chart::new().animation(false);
        assert_eq!(chart.to_object().to_script_text(), "{ animation: false }");
    }

    #[test]
    fn test_style_is_templated() {
        let chart = Chart::new().style("margin: '0 auto'");
        assert_eq!(
            chart.to_object().to_script_text(),
            "{ style: { margin: '0 auto' } }"
        );
    }
}

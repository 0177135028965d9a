use highcharts_script::Number;

options! {
    /// Options for the export-related buttons and menus.
    pub struct Exporting {
        /// Whether to enable the exporting module. Default: true
        enabled: bool => "enabled",
        /// The filename, without extension, to use for the exported
        /// chart. Default: chart
        filename: String => "filename",
        /// A scale factor applied to the rendering of the exported image,
        /// relative to the on-screen size. Default: 2
        scale: Number => "scale",
        /// The height of the original chart when exported, unless an
        /// explicit chart.height is set.
        source_height: Number => "sourceHeight",
        /// The width of the original chart when exported, unless an
        /// explicit chart.width is set. Default: 600
        source_width: Number => "sourceWidth",
        /// Default MIME type for exporting if chart.exportChart() is
        /// called without specifying one. Default: image/png
        mime_type: String => "type",
        /// The URL for the server module converting the generated SVG
        /// string to an image. Default: http://export.highcharts.com
        url: String => "url",
        /// The pixel width of charts exported to PNG or JPG. Default: 800
        width: Number => "width",
    }
}

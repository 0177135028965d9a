use highcharts_script::{Format, Number};

use crate::enums::{HorizontalAlign, VerticalAlign};

options! {
    /// Position of the credits label.
    pub struct CreditsPosition {
        /// Horizontal alignment of the credits. Default: right
        align: HorizontalAlign => "align",
        /// Vertical alignment of the credits. Default: bottom
        vertical_align: VerticalAlign => "verticalAlign",
        /// Horizontal pixel position of the credits. Default: -10
        x: Number => "x",
        /// Vertical pixel position of the credits. Default: -5
        y: Number => "y",
    }
}

options! {
    /// The credits label in the lower right corner of the chart.
    pub struct Credits {
        /// Whether to show the credits text. Default: true
        enabled: bool => "enabled",
        /// The URL for the credits label.
        href: String => "href",
        /// Position configuration for the credits label.
        position: CreditsPosition => "position",
        /// CSS styles for the credits label.
        style: String => "style" as Format::Templated("{ {} }"),
        /// The text for the credits label.
        text: String => "text",
    }
}

//! Style properties and their default values.
//!
//! Every default a shape can fall back to lives in [`defaults`]. The functions
//! there are used both by the serde decoders (for fields absent from a stored
//! record) and by the style constructors, so a shape is fully resolved once it
//! exists and the renderer never has to guess.

use serde::{Deserialize, Serialize};

/// Default style values.
pub mod defaults {
    /// Border color for lines, circles and rectangles.
    pub const BORDER_COLOR: &str = "#000000";
    /// Border thickness in pixels.
    pub const BORDER_THICKNESS: f64 = 2.0;
    /// Fill color for circles and rectangles.
    pub const FILL_COLOR: &str = "transparent";
    /// Text color.
    pub const TEXT_COLOR: &str = "#000";
    /// Font style keyword (`normal`, `italic`, `bold`, ...).
    pub const FONT_STYLE: &str = "normal";
    /// Font size in pixels.
    pub const FONT_SIZE: f64 = 16.0;

    pub fn border_color() -> String {
        BORDER_COLOR.to_string()
    }

    pub fn border_thickness() -> f64 {
        BORDER_THICKNESS
    }

    pub fn fill_color() -> String {
        FILL_COLOR.to_string()
    }

    pub fn text_color() -> String {
        TEXT_COLOR.to_string()
    }

    pub fn font_style() -> String {
        FONT_STYLE.to_string()
    }

    pub fn font_size() -> f64 {
        FONT_SIZE
    }
}

/// Outline and fill of a geometric shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Border color (hex or named color string).
    #[serde(default = "defaults::border_color")]
    pub border_color: String,
    /// Border thickness in pixels.
    #[serde(default = "defaults::border_thickness")]
    pub border_thickness: f64,
    /// Fill color, ignored by lines.
    #[serde(default = "defaults::fill_color")]
    pub fill_color: String,
}

impl StrokeStyle {
    /// Style with the given border and the default thickness and fill.
    pub fn with_border(color: impl Into<String>) -> Self {
        Self {
            border_color: color.into(),
            ..Self::default()
        }
    }

    /// Set the border thickness.
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.border_thickness = thickness;
        self
    }

    /// Set the fill color.
    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill_color = color.into();
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            border_color: defaults::border_color(),
            border_thickness: defaults::border_thickness(),
            fill_color: defaults::fill_color(),
        }
    }
}

/// Color and font of a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "defaults::text_color")]
    pub color: String,
    #[serde(default = "defaults::font_size")]
    pub font_size: f64,
    #[serde(default = "defaults::font_style")]
    pub font_style: String,
}

impl TextStyle {
    /// Set the font size.
    pub fn size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: defaults::text_color(),
            font_size: defaults::font_size(),
            font_style: defaults::font_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_defaults() {
        let style = StrokeStyle::default();
        assert_eq!(style.border_color, "#000000");
        assert!((style.border_thickness - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.fill_color, "transparent");
    }

    #[test]
    fn test_text_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.font_style, "normal");
        assert!((style.font_size - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let style: StrokeStyle = serde_json::from_str(r#"{"borderColor":"red"}"#).unwrap();
        assert_eq!(style.border_color, "red");
        assert!((style.border_thickness - 2.0).abs() < f64::EPSILON);
        assert_eq!(style.fill_color, "transparent");
    }

    #[test]
    fn test_builders() {
        let style = StrokeStyle::with_border("#ff0000").thickness(4.0).fill("blue");
        assert_eq!(style.border_color, "#ff0000");
        assert!((style.border_thickness - 4.0).abs() < f64::EPSILON);
        assert_eq!(style.fill_color, "blue");
    }
}

//! Text shape.

use super::ShapeError;
use crate::style::{TextStyle, defaults};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single-line text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    /// The text content, never empty.
    pub content: String,
    /// Left end of the baseline.
    pub position: Point,
    /// Font size in pixels.
    #[serde(default = "defaults::font_size")]
    pub font_size: f64,
    #[serde(default = "defaults::text_color")]
    pub color: String,
    /// Font style keyword, e.g. `normal`, `italic` or `bold`.
    #[serde(default = "defaults::font_style")]
    pub font_style: String,
}

impl Text {
    /// Create a new text label.
    pub fn new(
        position: Point,
        content: impl Into<String>,
        style: &TextStyle,
    ) -> Result<Self, ShapeError> {
        let text = Self {
            content: content.into(),
            position,
            font_size: style.font_size,
            color: style.color.clone(),
            font_style: style.font_style.clone(),
        };
        text.validate()?;
        Ok(text)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.content.is_empty() {
            return Err(ShapeError::EmptyText);
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ShapeError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

//! Rectangle shape.

use super::{ShapeError, check_thickness};
use crate::style::{StrokeStyle, defaults};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by the drag anchor and the release point.
///
/// The anchor is a true corner, not necessarily the top-left one: width and
/// height are signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub start_point: Point,
    pub end_point: Point,
    #[serde(default = "defaults::border_color")]
    pub border_color: String,
    #[serde(default = "defaults::border_thickness")]
    pub border_thickness: f64,
    #[serde(default = "defaults::fill_color")]
    pub fill_color: String,
}

impl Rectangle {
    /// Create a rectangle from two opposite corners.
    pub fn new(start: Point, end: Point, style: &StrokeStyle) -> Result<Self, ShapeError> {
        let rect = Self {
            start_point: start,
            end_point: end,
            border_color: style.border_color.clone(),
            border_thickness: style.border_thickness,
            fill_color: style.fill_color.clone(),
        };
        rect.validate()?;
        Ok(rect)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        check_thickness(self.border_thickness)
    }

    /// Signed width (negative when dragged leftwards).
    pub fn width(&self) -> f64 {
        self.end_point.x - self.start_point.x
    }

    /// Signed height (negative when dragged upwards).
    pub fn height(&self) -> f64 {
        self.end_point.y - self.start_point.y
    }

    /// The covered area with the sign of width and height normalized.
    pub fn normalized(&self) -> Rect {
        Rect::new(
            self.start_point.x.min(self.end_point.x),
            self.start_point.y.min(self.end_point.y),
            self.start_point.x.max(self.end_point.x),
            self.start_point.y.max(self.end_point.y),
        )
    }

    /// Closed outline, always wound from the normalized top-left corner.
    pub fn to_path(&self) -> BezPath {
        self.normalized().to_path(0.1)
    }
}

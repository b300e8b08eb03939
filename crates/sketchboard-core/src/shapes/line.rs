//! Line shape.

use super::{ShapeError, check_thickness};
use crate::style::{StrokeStyle, defaults};
use kurbo::{BezPath, Line as KurboLine, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub start_point: Point,
    pub end_point: Point,
    #[serde(default = "defaults::border_color")]
    pub border_color: String,
    #[serde(default = "defaults::border_thickness")]
    pub border_thickness: f64,
}

impl Line {
    /// Create a new line.
    pub fn new(start: Point, end: Point, style: &StrokeStyle) -> Result<Self, ShapeError> {
        let line = Self {
            start_point: start,
            end_point: end,
            border_color: style.border_color.clone(),
            border_thickness: style.border_thickness,
        };
        line.validate()?;
        Ok(line)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        check_thickness(self.border_thickness)
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start_point.distance(self.end_point)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start_point, self.end_point)
    }

    /// Path to stroke.
    pub fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

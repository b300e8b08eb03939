//! Circle shape.

use super::{ShapeError, check_thickness};
use crate::style::{StrokeStyle, defaults};
use kurbo::{BezPath, Circle as KurboCircle, Point, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// A circle around an anchor point.
///
/// Stored records may carry the radius directly or a second point on the
/// circumference; either way the radius is resolved when the circle is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CircleRecord")]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub border_color: String,
    pub border_thickness: f64,
    pub fill_color: String,
}

/// Wire form of a circle before the radius is resolved.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CircleRecord {
    #[serde(alias = "startPoint")]
    center: Point,
    radius: Option<f64>,
    end_point: Option<Point>,
    #[serde(default = "defaults::border_color")]
    border_color: String,
    #[serde(default = "defaults::border_thickness")]
    border_thickness: f64,
    #[serde(default = "defaults::fill_color")]
    fill_color: String,
}

impl TryFrom<CircleRecord> for Circle {
    type Error = ShapeError;

    fn try_from(record: CircleRecord) -> Result<Self, Self::Error> {
        let radius = match (record.radius, record.end_point) {
            (Some(radius), _) => radius,
            (None, Some(edge)) => record.center.distance(edge),
            (None, None) => return Err(ShapeError::MissingRadius),
        };
        let circle = Circle {
            center: record.center,
            radius,
            border_color: record.border_color,
            border_thickness: record.border_thickness,
            fill_color: record.fill_color,
        };
        circle.validate()?;
        Ok(circle)
    }
}

impl Circle {
    /// Create a circle with an explicit radius.
    pub fn new(center: Point, radius: f64, style: &StrokeStyle) -> Result<Self, ShapeError> {
        let circle = Self {
            center,
            radius,
            border_color: style.border_color.clone(),
            border_thickness: style.border_thickness,
            fill_color: style.fill_color.clone(),
        };
        circle.validate()?;
        Ok(circle)
    }

    /// Create a circle centered on `center` whose circumference passes through `edge`.
    pub fn through(center: Point, edge: Point, style: &StrokeStyle) -> Result<Self, ShapeError> {
        Self::new(center, center.distance(edge), style)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(ShapeError::InvalidRadius(self.radius));
        }
        check_thickness(self.border_thickness)
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }

    /// Closed path of the circumference.
    pub fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

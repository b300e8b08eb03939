//! Shape definitions for the drawing surface.

mod circle;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::Text;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Discriminator field of the wire format.
pub const TYPE_TAG: &str = "type";
/// Older records carry the discriminator under this name.
pub const LEGACY_TYPE_TAG: &str = "kind";

/// Shape construction and decoding errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("border thickness must be a positive number, got {0}")]
    InvalidThickness(f64),
    #[error("radius must be a non-negative number, got {0}")]
    InvalidRadius(f64),
    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f64),
    #[error("text content must not be empty")]
    EmptyText,
    #[error("circle needs either a radius or an end point")]
    MissingRadius,
    #[error("unrecognized shape kind: {0}")]
    UnknownKind(String),
    #[error("malformed shape record: {0}")]
    Decode(String),
}

/// The four drawable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
    Text,
}

impl ShapeKind {
    /// Wire name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Text => "text",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "line" => Some(ShapeKind::Line),
            "circle" => Some(ShapeKind::Circle),
            "rectangle" => Some(ShapeKind::Rectangle),
            "text" => Some(ShapeKind::Text),
            _ => None,
        }
    }
}

/// A committed drawing primitive.
///
/// `Unknown` stands in for records whose kind this build does not know (or
/// which could not be decoded); it is kept so collections preserve their
/// length and order, and the renderer skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Text(Text),
    #[serde(other)]
    Unknown,
}

impl Shape {
    /// Kind of this shape, `None` for [`Shape::Unknown`].
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Shape::Line(_) => Some(ShapeKind::Line),
            Shape::Circle(_) => Some(ShapeKind::Circle),
            Shape::Rectangle(_) => Some(ShapeKind::Rectangle),
            Shape::Text(_) => Some(ShapeKind::Text),
            Shape::Unknown => None,
        }
    }

    /// Wire name of this shape's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("unknown", ShapeKind::name)
    }

    /// Check the shape's invariants.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Line(s) => s.validate(),
            Shape::Circle(s) => s.validate(),
            Shape::Rectangle(s) => s.validate(),
            Shape::Text(s) => s.validate(),
            Shape::Unknown => Err(ShapeError::UnknownKind("unknown".to_string())),
        }
    }

    /// Strictly decode one shape record.
    ///
    /// Accepts `kind` as the discriminator when `type` is absent, fills in
    /// default style values and validates the result.
    pub fn decode(mut value: Value) -> Result<Shape, ShapeError> {
        if let Value::Object(map) = &mut value {
            if !map.contains_key(TYPE_TAG) {
                if let Some(kind) = map.get(LEGACY_TYPE_TAG).cloned() {
                    map.insert(TYPE_TAG.to_string(), kind);
                }
            }
        }

        let tag = value
            .get(TYPE_TAG)
            .and_then(Value::as_str)
            .ok_or_else(|| ShapeError::Decode("missing `type` discriminator".to_string()))?;
        if ShapeKind::from_name(tag).is_none() {
            return Err(ShapeError::UnknownKind(tag.to_string()));
        }

        let shape: Shape =
            serde_json::from_value(value).map_err(|e| ShapeError::Decode(e.to_string()))?;
        shape.validate()?;
        Ok(shape)
    }

    /// Leniently decode one shape record.
    ///
    /// Anything [`Shape::decode`] rejects becomes [`Shape::Unknown`].
    pub fn from_value(value: Value) -> Shape {
        match Shape::decode(value) {
            Ok(shape) => shape,
            Err(ShapeError::UnknownKind(kind)) => {
                log::debug!("Keeping shape of unrecognized kind `{}` as unknown", kind);
                Shape::Unknown
            }
            Err(e) => {
                log::warn!("Keeping malformed shape record as unknown: {}", e);
                Shape::Unknown
            }
        }
    }

    /// Encode to the wire format.
    pub fn to_value(&self) -> Result<Value, ShapeError> {
        serde_json::to_value(self).map_err(|e| ShapeError::Decode(e.to_string()))
    }
}

pub(crate) fn check_thickness(thickness: f64) -> Result<(), ShapeError> {
    if thickness.is_finite() && thickness > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidThickness(thickness))
    }
}

//! Drawing collection: the ordered list of committed shapes.

use crate::shapes::{Shape, ShapeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Field carrying the identifier assigned by the collection store.
pub const ID_FIELD: &str = "_id";
/// Alternative identifier field accepted on input.
const ALT_ID_FIELD: &str = "id";

/// One committed shape, with its identifier once persisted.
///
/// On the wire a drawing is the shape record itself plus an `_id` field.
/// Records that decode to [`Shape::Unknown`] keep their original JSON and are
/// written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub id: Option<String>,
    pub shape: Shape,
    raw: Option<Value>,
}

impl Drawing {
    /// A drawing that has not been persisted yet.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: None,
            shape,
            raw: None,
        }
    }

    /// A drawing with an assigned identifier.
    pub fn with_id(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: Some(id.into()),
            shape,
            raw: None,
        }
    }

    /// Decode a stored record. Never fails: undecodable shapes become
    /// [`Shape::Unknown`].
    pub fn from_value(value: Value) -> Self {
        let id = value
            .get(ID_FIELD)
            .or_else(|| value.get(ALT_ID_FIELD))
            .and_then(|id| match id {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
        let shape = Shape::from_value(value.clone());
        let raw = matches!(shape, Shape::Unknown).then_some(value);
        Self { id, shape, raw }
    }

    /// Original record of an undecodable drawing.
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    /// Encode to the wire format.
    pub fn to_value(&self) -> Result<Value, ShapeError> {
        if let Some(raw) = &self.raw {
            return Ok(raw.clone());
        }
        let mut value = self.shape.to_value()?;
        if let (Some(id), Value::Object(map)) = (&self.id, &mut value) {
            map.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        }
        Ok(value)
    }
}

impl Serialize for Drawing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Drawing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Drawing::from_value)
    }
}

/// Append-only, insertion-ordered sequence of drawings (back to front).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawingCollection {
    drawings: Vec<Drawing>,
}

impl DrawingCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already ordered list of drawings.
    pub fn from_drawings(drawings: Vec<Drawing>) -> Self {
        Self { drawings }
    }

    /// Append a freshly committed shape. Returns its index.
    pub fn push(&mut self, shape: Shape) -> usize {
        self.push_drawing(Drawing::new(shape))
    }

    /// Append a drawing. Returns its index.
    pub fn push_drawing(&mut self, drawing: Drawing) -> usize {
        self.drawings.push(drawing);
        self.drawings.len() - 1
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Drawing> {
        self.drawings.get(index)
    }

    pub fn last(&self) -> Option<&Drawing> {
        self.drawings.last()
    }

    /// Drawings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Drawing> {
        self.drawings.iter()
    }

    /// Shapes in insertion (paint) order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.drawings.iter().map(|d| &d.shape)
    }

    /// Serialize the collection as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a JSON array of drawing records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a DrawingCollection {
    type Item = &'a Drawing;
    type IntoIter = std::slice::Iter<'a, Drawing>;

    fn into_iter(self) -> Self::IntoIter {
        self.drawings.iter()
    }
}

//! In-memory collection.

use super::{
    BoxFuture, CollectionSink, CollectionSource, SourceError, SourceResult, check_appendable,
};
use crate::document::Drawing;
use crate::shapes::Shape;
use std::sync::RwLock;

/// In-memory collection for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryCollection {
    drawings: RwLock<Vec<Drawing>>,
}

impl MemoryCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection with existing drawings.
    pub fn with_drawings(drawings: Vec<Drawing>) -> Self {
        Self {
            drawings: RwLock::new(drawings),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> SourceResult<Vec<Drawing>> {
        self.drawings
            .read()
            .map(|d| d.to_vec())
            .map_err(|e| SourceError::Other(format!("Lock error: {}", e)))
    }
}

impl CollectionSource for MemoryCollection {
    fn fetch_all(&self) -> BoxFuture<'_, SourceResult<Vec<Drawing>>> {
        Box::pin(async move { self.snapshot() })
    }
}

impl CollectionSink for MemoryCollection {
    fn append(&self, shape: &Shape) -> BoxFuture<'_, SourceResult<String>> {
        let shape = shape.clone();
        Box::pin(async move {
            check_appendable(&shape)?;
            let id = uuid::Uuid::new_v4().to_string();
            let mut drawings = self
                .drawings
                .write()
                .map_err(|e| SourceError::Other(format!("Lock error: {}", e)))?;
            drawings.push(Drawing::with_id(id.clone(), shape));
            Ok(id)
        })
    }
}

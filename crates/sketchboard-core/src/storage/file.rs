//! JSON file collection for native platforms.

use super::{
    BoxFuture, CollectionSink, CollectionSource, SourceError, SourceResult, check_appendable,
};
use crate::document::Drawing;
use crate::shapes::Shape;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A collection stored as one JSON array of drawing records.
pub struct FileCollection {
    path: PathBuf,
    /// Serializes read-modify-write cycles of `append`.
    write_lock: Mutex<()>,
}

impl FileCollection {
    /// Collection backed by the file at `path`. The file is created on the
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records, untouched so unknown kinds survive a rewrite.
    fn read_records(&self) -> SourceResult<Vec<Value>> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()));
        }
        let json = fs::read_to_string(&self.path).map_err(|e| {
            SourceError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            SourceError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_records(&self, records: &[Value]) -> SourceResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SourceError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| SourceError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            SourceError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl CollectionSource for FileCollection {
    fn fetch_all(&self) -> BoxFuture<'_, SourceResult<Vec<Drawing>>> {
        Box::pin(async move {
            let records = self.read_records()?;
            Ok(records.into_iter().map(Drawing::from_value).collect())
        })
    }
}

impl CollectionSink for FileCollection {
    fn append(&self, shape: &Shape) -> BoxFuture<'_, SourceResult<String>> {
        let shape = shape.clone();
        Box::pin(async move {
            check_appendable(&shape)?;
            let _guard = self
                .write_lock
                .lock()
                .map_err(|e| SourceError::Other(format!("Lock error: {}", e)))?;

            let mut records = match self.read_records() {
                Ok(records) => records,
                Err(SourceError::NotFound(_)) => Vec::new(),
                Err(e) => return Err(e),
            };
            let id = uuid::Uuid::new_v4().to_string();
            let record = Drawing::with_id(id.clone(), shape)
                .to_value()
                .map_err(|e| SourceError::Serialization(e.to_string()))?;
            records.push(record);
            self.write_records(&records)?;
            Ok(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Text};
    use crate::storage::block_on;
    use crate::style::{StrokeStyle, TextStyle};
    use kurbo::Point;

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCollection::new(dir.path().join("nested").join("drawings.json"));

        let circle = Shape::Circle(
            Circle::new(Point::new(5.0, 5.0), 3.0, &StrokeStyle::default()).unwrap(),
        );
        let text = Shape::Text(
            Text::new(Point::new(1.0, 1.0), "note", &TextStyle::default()).unwrap(),
        );
        let id = block_on(store.append(&circle)).unwrap();
        block_on(store.append(&text)).unwrap();

        let drawings = block_on(store.fetch_all()).unwrap();
        assert_eq!(drawings.len(), 2);
        assert_eq!(drawings[0].id.as_deref(), Some(id.as_str()));
        assert_eq!(drawings[0].shape, circle);
        assert_eq!(drawings[1].shape, text);
    }

    #[test]
    fn test_missing_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCollection::new(dir.path().join("absent.json"));
        assert!(matches!(
            block_on(store.fetch_all()),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_reads_foreign_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawings.json");
        fs::write(
            &path,
            r#"[
                {"_id": "1", "type": "line", "startPoint": {"x": 0, "y": 0}, "endPoint": {"x": 9, "y": 9}},
                {"_id": "2", "type": "polygon"}
            ]"#,
        )
        .unwrap();

        let drawings = block_on(FileCollection::new(&path).fetch_all()).unwrap();
        assert_eq!(drawings.len(), 2);
        assert_eq!(drawings[1].shape, Shape::Unknown);
    }

    #[test]
    fn test_append_preserves_foreign_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawings.json");
        fs::write(&path, r#"[{"_id": "s1", "type": "spline", "knots": [1, 2, 3]}]"#).unwrap();

        let store = FileCollection::new(&path);
        let circle = Shape::Circle(
            Circle::new(Point::new(1.0, 1.0), 1.0, &StrokeStyle::default()).unwrap(),
        );
        block_on(store.append(&circle)).unwrap();

        let raw: Vec<Value> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["knots"], serde_json::json!([1, 2, 3]));
        assert_eq!(raw[1]["type"], "circle");
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            block_on(FileCollection::new(&path).fetch_all()),
            Err(SourceError::Serialization(_))
        ));
    }
}

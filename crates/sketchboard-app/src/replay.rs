//! Headless replay of recorded input events.

use crate::authoring::AuthoringView;
use crate::error::{AppError, AppResult};
use sketchboard_core::{CollectionSink, DrawingCollection, InputEvent, Outcome};
use sketchboard_render::Surface;
use std::fs;
use std::path::Path;

/// Load a JSON array of input events.
pub fn load_script(path: &Path) -> AppResult<Vec<InputEvent>> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&json).map_err(|e| AppError::Script {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Feed `events` to the view in order. Returns the collection indices of the
/// committed shapes, in commit order.
pub fn replay<S: Surface>(view: &mut AuthoringView<S>, events: &[InputEvent]) -> Vec<usize> {
    let mut committed = Vec::new();
    for event in events {
        if let Outcome::Committed(index) = view.handle(event) {
            committed.push(index);
        }
    }
    log::info!(
        "Replayed {} events, {} shapes committed",
        events.len(),
        committed.len()
    );
    committed
}

/// Append the committed shapes to `sink` in commit order. Returns the
/// assigned identifiers.
pub async fn publish<K: CollectionSink + ?Sized>(
    sink: &K,
    collection: &DrawingCollection,
    committed: &[usize],
) -> AppResult<Vec<String>> {
    let mut ids = Vec::with_capacity(committed.len());
    for drawing in committed.iter().filter_map(|&i| collection.get(i)) {
        let id = sink.append(&drawing.shape).await?;
        log::debug!("Published {} as {}", drawing.shape.kind_name(), id);
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::{CollectionSource, MemoryCollection, Shape, ToolKind, ToolStyle};
    use sketchboard_render::CommandRecorder;

    fn script() -> Vec<InputEvent> {
        vec![
            InputEvent::select_tool(ToolKind::Circle),
            InputEvent::pointer_down(50.0, 50.0),
            InputEvent::pointer_up(80.0, 90.0),
            InputEvent::select_tool(ToolKind::Text),
            InputEvent::pointer_down(20.0, 20.0),
            InputEvent::text_input("Hi"),
            InputEvent::ConfirmText,
        ]
    }

    #[test]
    fn test_replay_reports_commits() {
        let mut view = AuthoringView::new(CommandRecorder::new(800, 600), ToolStyle::default());
        assert_eq!(replay(&mut view, &script()), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_publish_in_commit_order() {
        let mut view = AuthoringView::new(CommandRecorder::new(800, 600), ToolStyle::default());
        let committed = replay(&mut view, &script());

        let sink = MemoryCollection::new();
        let ids = publish(&sink, view.collection(), &committed).await.unwrap();
        assert_eq!(ids.len(), 2);

        let stored = sink.fetch_all().await.unwrap();
        assert!(matches!(stored[0].shape, Shape::Circle(_)));
        assert!(matches!(stored[1].shape, Shape::Text(_)));
        assert_eq!(stored[1].id.as_deref(), Some(ids[1].as_str()));
    }

    #[test]
    fn test_load_script_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, r#"[{"type": "teleport"}]"#).unwrap();
        assert!(matches!(load_script(&path), Err(AppError::Script { .. })));
        assert!(matches!(
            load_script(&dir.path().join("missing.json")),
            Err(AppError::Io(_))
        ));
    }
}

//! The authoring view: an editor bound to a surface.

use sketchboard_core::{DrawingCollection, Editor, EditorState, InputEvent, Outcome, ToolStyle};
use sketchboard_render::{RenderContext, Surface, build_scene};

/// Feeds events to the editor and repaints after every visible change.
pub struct AuthoringView<S: Surface> {
    editor: Editor,
    surface: S,
}

impl<S: Surface> AuthoringView<S> {
    /// Create the view and paint the empty canvas.
    pub fn new(surface: S, style: ToolStyle) -> Self {
        let mut view = Self {
            editor: Editor::with_style(style),
            surface,
        };
        view.redraw();
        view
    }

    /// Process one event, repainting when the scene changed.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        let outcome = self.editor.handle(event);
        if outcome.needs_redraw() {
            self.redraw();
        }
        outcome
    }

    /// Clear and repaint the committed shapes plus the in-progress one.
    pub fn redraw(&mut self) {
        let preview = self.editor.in_progress();
        let ctx = RenderContext::new(self.editor.collection()).with_in_progress(preview.as_ref());
        build_scene(&mut self.surface, &ctx);
    }

    pub fn state(&self) -> &EditorState {
        self.editor.state()
    }

    pub fn collection(&self) -> &DrawingCollection {
        self.editor.collection()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_parts(self) -> (DrawingCollection, S) {
        (self.editor.into_collection(), self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::ToolKind;
    use sketchboard_render::{CommandRecorder, DrawCommand, render_shape};

    fn view() -> AuthoringView<CommandRecorder> {
        AuthoringView::new(CommandRecorder::new(800, 600), ToolStyle::default())
    }

    #[test]
    fn test_initial_paint() {
        let view = view();
        assert_eq!(view.surface().commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_preview_follows_pointer() {
        let mut view = view();
        view.handle(&InputEvent::select_tool(ToolKind::Line));
        view.handle(&InputEvent::pointer_down(10.0, 10.0));
        view.handle(&InputEvent::pointer_move(60.0, 30.0));

        let preview = view.state().in_progress().unwrap();
        let mut expected = CommandRecorder::new(800, 600);
        expected.clear();
        render_shape(&mut expected, &preview);
        assert_eq!(view.surface().commands(), expected.commands());
    }

    #[test]
    fn test_committed_shapes_before_preview() {
        let mut view = view();
        view.handle(&InputEvent::select_tool(ToolKind::Rectangle));
        view.handle(&InputEvent::pointer_down(0.0, 0.0));
        view.handle(&InputEvent::pointer_up(20.0, 20.0));
        view.handle(&InputEvent::pointer_down(40.0, 40.0));
        view.handle(&InputEvent::pointer_move(60.0, 60.0));

        let committed = view.collection().get(0).unwrap().shape.clone();
        let preview = view.state().in_progress().unwrap();
        let mut expected = CommandRecorder::new(800, 600);
        expected.clear();
        render_shape(&mut expected, &committed);
        render_shape(&mut expected, &preview);
        assert_eq!(view.surface().commands(), expected.commands());
    }

    #[test]
    fn test_unchanged_outcome_keeps_frame() {
        let mut view = view();
        view.handle(&InputEvent::pointer_down(0.0, 0.0));
        view.handle(&InputEvent::pointer_up(5.0, 5.0));
        let frame = view.surface().commands().to_vec();

        // Typing into the text field changes nothing visible.
        assert_eq!(
            view.handle(&InputEvent::text_input("abc")),
            Outcome::Unchanged
        );
        assert_eq!(view.surface().commands(), frame.as_slice());
    }

    #[test]
    fn test_cancel_removes_preview() {
        let mut view = view();
        view.handle(&InputEvent::pointer_down(0.0, 0.0));
        view.handle(&InputEvent::pointer_move(30.0, 30.0));
        view.handle(&InputEvent::Cancel);
        assert_eq!(view.surface().commands(), &[DrawCommand::Clear]);

        let (collection, _) = view.into_parts();
        assert!(collection.is_empty());
    }
}

//! Tool system: the interaction state machine of the authoring view.
//!
//! ```text
//!            pointer-down (line/circle/rectangle)         pointer-up
//!   Idle ─────────────────────────────────────▶ Drawing ────────────▶ Idle (+ shape)
//!     │                                          │  ▲
//!     │                                          └──┘ pointer-move
//!     │  pointer-down (text)                confirm (non-empty)
//!     └──────────────────▶ AwaitingText ─────────────────────────────▶ Idle (+ shape)
//! ```
//!
//! [`EditorState`] is a plain value: [`EditorState::handle`] consumes it with
//! one event and returns the next state plus an [`Effect`]. [`Editor`] pairs
//! that state with the drawing collection it commits into.

use crate::document::DrawingCollection;
use crate::input::InputEvent;
use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeError, Text};
use crate::style::{StrokeStyle, TextStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Line,
    Circle,
    Rectangle,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Line,
            ToolKind::Circle,
            ToolKind::Rectangle,
            ToolKind::Text,
        ]
    }

    /// Display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Circle => "Circle",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Text => "Text",
        }
    }

    /// Shape built by dragging with this tool, `None` for the text tool.
    pub fn draft_kind(self) -> Option<DraftKind> {
        match self {
            ToolKind::Line => Some(DraftKind::Line),
            ToolKind::Circle => Some(DraftKind::Circle),
            ToolKind::Rectangle => Some(DraftKind::Rectangle),
            ToolKind::Text => None,
        }
    }
}

/// Shapes that are constructed by a pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Line,
    Circle,
    Rectangle,
}

/// Style applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolStyle {
    #[serde(default = "ToolStyle::default_stroke")]
    pub stroke: StrokeStyle,
    #[serde(default = "ToolStyle::default_text")]
    pub text: TextStyle,
}

impl ToolStyle {
    fn default_stroke() -> StrokeStyle {
        StrokeStyle::with_border("#000000").thickness(2.0).fill("#FFFFFF")
    }

    fn default_text() -> TextStyle {
        TextStyle::default().color("#000000").size(20.0)
    }
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            stroke: Self::default_stroke(),
            text: Self::default_text(),
        }
    }
}

/// A shape under construction by a pointer drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub kind: DraftKind,
    /// Where the pointer went down.
    pub start: Point,
    /// Latest pointer position.
    pub end: Point,
    pub style: StrokeStyle,
}

impl Draft {
    pub fn new(kind: DraftKind, point: Point, style: StrokeStyle) -> Self {
        Self {
            kind,
            start: point,
            end: point,
            style,
        }
    }

    /// Build the shape this draft currently describes.
    pub fn to_shape(&self) -> Result<Shape, ShapeError> {
        match self.kind {
            DraftKind::Line => Line::new(self.start, self.end, &self.style).map(Shape::Line),
            DraftKind::Circle => {
                Circle::through(self.start, self.end, &self.style).map(Shape::Circle)
            }
            DraftKind::Rectangle => {
                Rectangle::new(self.start, self.end, &self.style).map(Shape::Rectangle)
            }
        }
    }
}

/// Phase of the interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A geometric shape is being dragged out.
    Drawing(Draft),
    /// The text tool was clicked; waiting for the text to be confirmed.
    AwaitingText { anchor: Point },
}

/// What the caller has to do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// The in-progress shape changed; repaint.
    Redraw,
    /// A shape was committed; append it and repaint.
    Commit(Shape),
}

/// Complete state of the interaction, passed through every transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub tool: ToolKind,
    pub phase: Phase,
    pub style: ToolStyle,
    /// Contents of the text input field.
    pub text_input: String,
}

impl EditorState {
    pub fn new(tool: ToolKind, style: ToolStyle) -> Self {
        Self {
            tool,
            style,
            ..Self::default()
        }
    }

    /// Apply one event.
    pub fn handle(self, event: &InputEvent) -> (Self, Effect) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(*position),
            InputEvent::PointerMove { position } => self.pointer_move(*position),
            InputEvent::PointerUp { position } => self.pointer_up(*position),
            InputEvent::SelectTool { tool } => self.select_tool(*tool),
            InputEvent::TextInput { text } => {
                let mut next = self;
                next.text_input.clone_from(text);
                (next, Effect::None)
            }
            InputEvent::ConfirmText => self.confirm_text(),
            InputEvent::Cancel => self.cancel(),
        }
    }

    fn pointer_down(mut self, point: Point) -> (Self, Effect) {
        let was_drawing = matches!(self.phase, Phase::Drawing(_));
        if was_drawing {
            log::debug!("Pointer down while drawing; restarting the in-progress shape");
        }

        match self.tool.draft_kind() {
            Some(kind) => {
                self.phase = Phase::Drawing(Draft::new(kind, point, self.style.stroke.clone()));
                (self, Effect::Redraw)
            }
            None => {
                self.phase = Phase::AwaitingText { anchor: point };
                let effect = if was_drawing { Effect::Redraw } else { Effect::None };
                (self, effect)
            }
        }
    }

    fn pointer_move(mut self, point: Point) -> (Self, Effect) {
        match &mut self.phase {
            Phase::Drawing(draft) => {
                draft.end = point;
                (self, Effect::Redraw)
            }
            _ => (self, Effect::None),
        }
    }

    fn pointer_up(mut self, point: Point) -> (Self, Effect) {
        let Phase::Drawing(mut draft) = std::mem::take(&mut self.phase) else {
            // No pointer-down started a drag: nothing to commit.
            return (self, Effect::None);
        };
        draft.end = point;

        match draft.to_shape() {
            Ok(shape) => {
                log::debug!("Committed {}", shape.kind_name());
                (self, Effect::Commit(shape))
            }
            Err(e) => {
                log::warn!("Discarding in-progress shape: {}", e);
                (self, Effect::Redraw)
            }
        }
    }

    fn select_tool(mut self, tool: ToolKind) -> (Self, Effect) {
        if self.phase == Phase::Idle {
            self.tool = tool;
        } else {
            log::debug!(
                "Ignoring switch to the {} tool outside the idle phase",
                tool.display_name()
            );
        }
        (self, Effect::None)
    }

    fn confirm_text(mut self) -> (Self, Effect) {
        let Phase::AwaitingText { anchor } = self.phase else {
            return (self, Effect::None);
        };
        if self.text_input.is_empty() {
            return (self, Effect::None);
        }

        match Text::new(anchor, self.text_input.as_str(), &self.style.text) {
            Ok(text) => {
                self.phase = Phase::Idle;
                self.text_input.clear();
                log::debug!("Committed text");
                (self, Effect::Commit(Shape::Text(text)))
            }
            Err(e) => {
                log::warn!("Cannot place text: {}", e);
                (self, Effect::None)
            }
        }
    }

    fn cancel(mut self) -> (Self, Effect) {
        match std::mem::take(&mut self.phase) {
            Phase::Drawing(_) => (self, Effect::Redraw),
            Phase::AwaitingText { .. } | Phase::Idle => (self, Effect::None),
        }
    }

    /// Shape to preview on top of the committed ones.
    pub fn in_progress(&self) -> Option<Shape> {
        match &self.phase {
            Phase::Drawing(draft) => draft.to_shape().ok(),
            _ => None,
        }
    }

    /// Where confirmed text will be placed.
    pub fn pending_anchor(&self) -> Option<Point> {
        match self.phase {
            Phase::AwaitingText { anchor } => Some(anchor),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }
}

/// Result of feeding one event to an [`Editor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Redraw,
    /// A shape was appended at this index.
    Committed(usize),
}

impl Outcome {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// The authoring session: interaction state plus the collection it owns.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    collection: DrawingCollection,
}

impl Editor {
    /// Create an editor with the default tool and style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor using `style` for new shapes.
    pub fn with_style(style: ToolStyle) -> Self {
        Self {
            state: EditorState::new(ToolKind::default(), style),
            collection: DrawingCollection::new(),
        }
    }

    /// Process one event.
    pub fn handle(&mut self, event: &InputEvent) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = state.handle(event);
        self.state = next;

        match effect {
            Effect::None => Outcome::Unchanged,
            Effect::Redraw => Outcome::Redraw,
            Effect::Commit(shape) => Outcome::Committed(self.collection.push(shape)),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn tool(&self) -> ToolKind {
        self.state.tool
    }

    pub fn collection(&self) -> &DrawingCollection {
        &self.collection
    }

    pub fn in_progress(&self) -> Option<Shape> {
        self.state.in_progress()
    }

    pub fn into_collection(self) -> DrawingCollection {
        self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(editor: &mut Editor, events: &[InputEvent]) -> Vec<Outcome> {
        events.iter().map(|e| editor.handle(e)).collect()
    }

    #[test]
    fn test_tool_selection() {
        let mut editor = Editor::new();
        assert_eq!(editor.tool(), ToolKind::Line);

        editor.handle(&InputEvent::select_tool(ToolKind::Rectangle));
        assert_eq!(editor.tool(), ToolKind::Rectangle);
    }

    #[test]
    fn test_line_drag_commits_one_line() {
        let mut editor = Editor::new();
        let outcomes = run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Line),
                InputEvent::pointer_down(10.0, 10.0),
                InputEvent::pointer_move(40.0, 25.0),
                InputEvent::pointer_move(90.0, 45.0),
                InputEvent::pointer_up(100.0, 50.0),
            ],
        );
        assert_eq!(
            outcomes,
            vec![
                Outcome::Unchanged,
                Outcome::Redraw,
                Outcome::Redraw,
                Outcome::Redraw,
                Outcome::Committed(0),
            ]
        );
        assert_eq!(editor.collection().len(), 1);

        let Shape::Line(line) = &editor.collection().get(0).unwrap().shape else {
            panic!("expected a line");
        };
        assert_eq!(line.start_point, Point::new(10.0, 10.0));
        assert_eq!(line.end_point, Point::new(100.0, 50.0));
        assert!((line.border_thickness - 2.0).abs() < f64::EPSILON);
        assert!(editor.state().is_idle());
        assert!(editor.in_progress().is_none());
    }

    #[test]
    fn test_circle_radius_from_drag() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Circle),
                InputEvent::pointer_down(50.0, 50.0),
                InputEvent::pointer_up(80.0, 90.0),
            ],
        );
        let Shape::Circle(circle) = &editor.collection().get(0).unwrap().shape else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, Point::new(50.0, 50.0));
        assert!((circle.radius - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_keeps_drag_anchor() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Rectangle),
                InputEvent::pointer_down(80.0, 90.0),
                InputEvent::pointer_up(20.0, 30.0),
            ],
        );
        let Shape::Rectangle(rect) = &editor.collection().get(0).unwrap().shape else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.start_point, Point::new(80.0, 90.0));
        assert!((rect.width() + 60.0).abs() < f64::EPSILON);
        assert_eq!(rect.fill_color, "#FFFFFF");
    }

    #[test]
    fn test_pointer_up_without_down_is_noop() {
        let mut editor = Editor::new();
        let outcome = editor.handle(&InputEvent::pointer_up(5.0, 5.0));
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(editor.collection().is_empty());
    }

    #[test]
    fn test_pointer_move_while_idle_is_noop() {
        let mut editor = Editor::new();
        assert_eq!(
            editor.handle(&InputEvent::pointer_move(5.0, 5.0)),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_in_progress_tracks_pointer() {
        let mut editor = Editor::new();
        editor.handle(&InputEvent::select_tool(ToolKind::Rectangle));
        editor.handle(&InputEvent::pointer_down(0.0, 0.0));

        let Some(Shape::Rectangle(preview)) = editor.in_progress() else {
            panic!("expected a rectangle preview");
        };
        assert_eq!(preview.end_point, Point::ZERO);

        editor.handle(&InputEvent::pointer_move(30.0, 40.0));
        let Some(Shape::Rectangle(preview)) = editor.in_progress() else {
            panic!("expected a rectangle preview");
        };
        assert_eq!(preview.end_point, Point::new(30.0, 40.0));
        assert!(editor.collection().is_empty());
    }

    #[test]
    fn test_text_commit() {
        let mut editor = Editor::new();
        let outcomes = run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Text),
                InputEvent::pointer_down(20.0, 20.0),
                InputEvent::text_input("Hello"),
                InputEvent::ConfirmText,
            ],
        );
        assert_eq!(outcomes[1], Outcome::Unchanged);
        assert_eq!(outcomes[3], Outcome::Committed(0));

        let Shape::Text(text) = &editor.collection().get(0).unwrap().shape else {
            panic!("expected text");
        };
        assert_eq!(text.content, "Hello");
        assert_eq!(text.position, Point::new(20.0, 20.0));
        assert!((text.font_size - 20.0).abs() < f64::EPSILON);
        assert!(editor.state().text_input.is_empty());
        assert!(editor.state().pending_anchor().is_none());
    }

    #[test]
    fn test_empty_text_confirm_keeps_anchor() {
        let mut editor = Editor::new();
        let outcomes = run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Text),
                InputEvent::pointer_down(20.0, 20.0),
                InputEvent::ConfirmText,
            ],
        );
        assert_eq!(outcomes[2], Outcome::Unchanged);
        assert!(editor.collection().is_empty());
        assert_eq!(editor.state().pending_anchor(), Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_confirm_without_anchor_is_noop() {
        let mut editor = Editor::new();
        editor.handle(&InputEvent::select_tool(ToolKind::Text));
        editor.handle(&InputEvent::text_input("orphan"));
        assert_eq!(editor.handle(&InputEvent::ConfirmText), Outcome::Unchanged);
        assert!(editor.collection().is_empty());
        assert_eq!(editor.state().text_input, "orphan");
    }

    #[test]
    fn test_text_pointer_down_reanchors() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Text),
                InputEvent::pointer_down(1.0, 1.0),
                InputEvent::pointer_down(7.0, 9.0),
            ],
        );
        assert_eq!(editor.state().pending_anchor(), Some(Point::new(7.0, 9.0)));
    }

    #[test]
    fn test_tool_switch_rejected_while_drawing() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Rectangle),
                InputEvent::pointer_down(0.0, 0.0),
                InputEvent::select_tool(ToolKind::Circle),
                InputEvent::pointer_up(10.0, 10.0),
            ],
        );
        assert_eq!(editor.tool(), ToolKind::Rectangle);
        assert!(matches!(
            editor.collection().get(0).unwrap().shape,
            Shape::Rectangle(_)
        ));
    }

    #[test]
    fn test_tool_switch_rejected_while_awaiting_text() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Text),
                InputEvent::pointer_down(0.0, 0.0),
                InputEvent::select_tool(ToolKind::Line),
            ],
        );
        assert_eq!(editor.tool(), ToolKind::Text);

        editor.handle(&InputEvent::Cancel);
        editor.handle(&InputEvent::select_tool(ToolKind::Line));
        assert_eq!(editor.tool(), ToolKind::Line);
    }

    #[test]
    fn test_cancel_discards_in_progress_shape() {
        let mut editor = Editor::new();
        let outcomes = run(
            &mut editor,
            &[
                InputEvent::pointer_down(0.0, 0.0),
                InputEvent::pointer_move(50.0, 50.0),
                InputEvent::Cancel,
                InputEvent::pointer_up(60.0, 60.0),
            ],
        );
        assert_eq!(outcomes[2], Outcome::Redraw);
        assert_eq!(outcomes[3], Outcome::Unchanged);
        assert!(editor.collection().is_empty());
        assert!(editor.in_progress().is_none());
    }

    #[test]
    fn test_second_pointer_down_restarts_draft() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::pointer_down(0.0, 0.0),
                InputEvent::pointer_down(5.0, 5.0),
                InputEvent::pointer_up(15.0, 5.0),
            ],
        );
        assert_eq!(editor.collection().len(), 1);
        let Shape::Line(line) = &editor.collection().get(0).unwrap().shape else {
            panic!("expected a line");
        };
        assert_eq!(line.start_point, Point::new(5.0, 5.0));
    }

    #[test]
    fn test_invalid_style_discards_shape() {
        let style = ToolStyle {
            stroke: StrokeStyle::default().thickness(0.0),
            ..ToolStyle::default()
        };
        let mut editor = Editor::with_style(style);
        run(&mut editor, &[InputEvent::pointer_down(0.0, 0.0)]);
        assert!(editor.in_progress().is_none());

        let outcome = editor.handle(&InputEvent::pointer_up(3.0, 3.0));
        assert_eq!(outcome, Outcome::Redraw);
        assert!(editor.collection().is_empty());
        assert!(editor.state().is_idle());
    }

    #[test]
    fn test_state_is_a_plain_value() {
        let state = EditorState::new(ToolKind::Circle, ToolStyle::default());
        let (state, effect) = state.handle(&InputEvent::pointer_down(1.0, 1.0));
        assert_eq!(effect, Effect::Redraw);
        let (state, effect) = state.handle(&InputEvent::pointer_up(4.0, 5.0));
        assert!(matches!(effect, Effect::Commit(Shape::Circle(_))));
        assert!(state.is_idle());
    }

    #[test]
    fn test_sequential_commits_keep_order() {
        let mut editor = Editor::new();
        run(
            &mut editor,
            &[
                InputEvent::select_tool(ToolKind::Rectangle),
                InputEvent::pointer_down(0.0, 0.0),
                InputEvent::pointer_up(10.0, 10.0),
                InputEvent::select_tool(ToolKind::Circle),
                InputEvent::pointer_down(20.0, 20.0),
                InputEvent::pointer_up(25.0, 20.0),
            ],
        );
        let kinds: Vec<&str> = editor.collection().shapes().map(Shape::kind_name).collect();
        assert_eq!(kinds, vec!["rectangle", "circle"]);
    }
}

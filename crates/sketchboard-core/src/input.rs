//! Input events delivered to the tool state machine.
//!
//! Coordinates are surface-local pixels with the origin at the top-left and y
//! growing downwards. Events are serializable so a session can be recorded
//! and replayed as a JSON script:
//!
//! ```json
//! [
//!   { "type": "selectTool", "tool": "rectangle" },
//!   { "type": "pointerDown", "position": { "x": 10, "y": 10 } },
//!   { "type": "pointerMove", "position": { "x": 60, "y": 40 } },
//!   { "type": "pointerUp", "position": { "x": 80, "y": 50 } }
//! ]
//! ```

use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single pointer or keyboard event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp { position: Point },
    /// Choose the tool used by the next pointer-down.
    SelectTool { tool: ToolKind },
    /// Replace the contents of the text input field.
    TextInput { text: String },
    /// The "add text" action.
    ConfirmText,
    /// Abandon the shape or text anchor under construction.
    Cancel,
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            position: Point::new(x, y),
        }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        InputEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        InputEvent::PointerUp {
            position: Point::new(x, y),
        }
    }

    pub fn select_tool(tool: ToolKind) -> Self {
        InputEvent::SelectTool { tool }
    }

    pub fn text_input(text: impl Into<String>) -> Self {
        InputEvent::TextInput { text: text.into() }
    }

    /// Map a named key press to an event, if the key has a binding.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(InputEvent::Cancel),
            "Enter" => Some(InputEvent::ConfirmText),
            _ => None,
        }
    }
}

//! Sketchboard Core Library
//!
//! Platform-agnostic data structures and logic for the Sketchboard drawing
//! surface: the shape model, the append-only drawing collection, pointer and
//! keyboard input events, the tool state machine that turns those events into
//! committed shapes, and the collection source/sink abstraction.

pub mod document;
pub mod input;
pub mod shapes;
pub mod storage;
pub mod style;
pub mod tools;

pub use document::{Drawing, DrawingCollection};
pub use input::InputEvent;
pub use shapes::{Circle, Line, Rectangle, Shape, ShapeError, ShapeKind, Text};
pub use storage::{
    CollectionSink, CollectionSource, DrawingStore, FileCollection, HttpCollection,
    MemoryCollection, SourceError, SourceResult, fetch_or_empty,
};
pub use style::{StrokeStyle, TextStyle};
pub use tools::{Editor, EditorState, Effect, Outcome, Phase, ToolKind, ToolStyle};

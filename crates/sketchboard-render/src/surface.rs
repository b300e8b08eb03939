//! Drawing surface abstraction.

use crate::color::Rgba;
use kurbo::{BezPath, Point, Stroke};
use thiserror::Error;

/// Font family used for every text shape.
pub const FONT_FAMILY: &str = "Arial";

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Font error: {0}")]
    Font(String),
    #[error("PNG encoding failed: {0}")]
    Encode(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Font for a text draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Style keyword such as `normal`, `italic` or `bold`.
    pub style: String,
    /// Size in pixels.
    pub size: f64,
    pub family: String,
}

impl FontDescriptor {
    pub fn new(style: impl Into<String>, size: f64) -> Self {
        Self {
            style: style.into(),
            size,
            family: FONT_FAMILY.to_string(),
        }
    }

    /// CSS font shorthand, e.g. `normal 16px Arial`.
    pub fn css(&self) -> String {
        format!("{} {}px {}", self.style, self.size, self.family)
    }
}

/// A fixed-size 2D raster target. Origin top-left, y down.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Fill the interior of a closed path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Rgba);

    /// Stroke the outline of a path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba);

    /// Draw `text` with its baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, font: &FontDescriptor, color: Rgba);
}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillPath {
        path: BezPath,
        color: Rgba,
    },
    StrokePath {
        path: BezPath,
        width: f64,
        color: Rgba,
    },
    FillText {
        text: String,
        origin: Point,
        font: FontDescriptor,
        color: Rgba,
    },
}

/// Surface that records draw calls instead of painting.
///
/// A clear drops everything recorded before it, like clearing a raster does.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for CommandRecorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            width: stroke.width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontDescriptor, color: Rgba) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }
}

//! Application configuration.

use crate::error::AppResult;
use sketchboard_core::ToolStyle;
use sketchboard_render::{RasterSurface, default_font, load_font};
use std::path::PathBuf;

/// Collection service queried when no source is given.
pub const DEFAULT_SOURCE: &str = "http://localhost:3000";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Authoring canvas size.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Gallery thumbnail size.
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    /// TrueType/OpenType file used to draw text shapes. `None` uses the
    /// bundled sans-serif face.
    pub font_path: Option<PathBuf>,
    /// Base URL or JSON file path of the drawing collection.
    pub source: String,
    /// Style applied to newly authored shapes.
    pub tool_style: ToolStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            thumbnail_width: 500,
            thumbnail_height: 500,
            font_path: None,
            source: DEFAULT_SOURCE.to_string(),
            tool_style: ToolStyle::default(),
        }
    }
}

impl AppConfig {
    /// Surface for the authoring view.
    pub fn canvas_surface(&self) -> AppResult<RasterSurface> {
        self.surface(self.canvas_width, self.canvas_height)
    }

    /// Surface for one gallery thumbnail.
    pub fn thumbnail_surface(&self) -> AppResult<RasterSurface> {
        self.surface(self.thumbnail_width, self.thumbnail_height)
    }

    fn surface(&self, width: u32, height: u32) -> AppResult<RasterSurface> {
        let font = match &self.font_path {
            Some(path) => load_font(path)?,
            None => default_font()?,
        };
        Ok(RasterSurface::new(width, height)?.with_font(font))
    }
}

//! The read-only gallery: one thumbnail and a detail list per drawing.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use sketchboard_core::{CollectionSource, Drawing, DrawingCollection, Shape, fetch_or_empty};
use sketchboard_render::{Surface, render_drawing};
use std::fs;
use std::path::{Path, PathBuf};

/// The fetched collection, rendered one drawing per surface.
pub struct GalleryView {
    collection: DrawingCollection,
}

/// One exported thumbnail.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub path: PathBuf,
    pub kind: &'static str,
    pub details: Vec<(&'static str, String)>,
}

impl GalleryView {
    /// Fetch the collection once. A failed fetch leaves the gallery empty.
    pub async fn mount<Src: CollectionSource + ?Sized>(source: &Src) -> Self {
        Self {
            collection: fetch_or_empty(source).await,
        }
    }

    pub fn from_collection(collection: DrawingCollection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &DrawingCollection {
        &self.collection
    }

    /// Clear `surface` and paint the drawing at `index`. Returns `false` when
    /// there is no such drawing.
    pub fn render_thumbnail<S: Surface + ?Sized>(&self, index: usize, surface: &mut S) -> bool {
        match self.collection.get(index) {
            Some(drawing) => {
                render_drawing(surface, &drawing.shape);
                true
            }
            None => false,
        }
    }

    /// Render every drawing to `<out_dir>/<index>-<kind>.png`.
    pub fn export(&self, config: &AppConfig, out_dir: &Path) -> AppResult<Vec<GalleryEntry>> {
        fs::create_dir_all(out_dir).map_err(|e| {
            AppError::Io(format!("Failed to create {}: {}", out_dir.display(), e))
        })?;

        let mut surface = config.thumbnail_surface()?;
        let mut entries = Vec::with_capacity(self.collection.len());
        for (index, drawing) in self.collection.iter().enumerate() {
            self.render_thumbnail(index, &mut surface);
            let path = out_dir.join(thumbnail_name(index, &drawing.shape));
            surface.save_png(&path)?;
            log::debug!("Wrote {}", path.display());

            entries.push(GalleryEntry {
                path,
                kind: drawing.shape.kind_name(),
                details: describe(drawing),
            });
        }
        Ok(entries)
    }
}

/// File name of the thumbnail for the drawing at `index`.
pub fn thumbnail_name(index: usize, shape: &Shape) -> String {
    format!("{}-{}.png", index, shape.kind_name())
}

fn point(p: kurbo::Point) -> String {
    format!("({}, {})", p.x, p.y)
}

/// Labelled properties of a drawing, as listed under its thumbnail.
pub fn describe(drawing: &Drawing) -> Vec<(&'static str, String)> {
    let mut details = Vec::new();
    if let Some(id) = &drawing.id {
        details.push(("Id", id.clone()));
    }
    match &drawing.shape {
        Shape::Line(line) => {
            details.push(("Start Point", point(line.start_point)));
            details.push(("End Point", point(line.end_point)));
            details.push(("Border Color", line.border_color.clone()));
            details.push(("Border Thickness", line.border_thickness.to_string()));
        }
        Shape::Circle(circle) => {
            details.push(("Center", point(circle.center)));
            details.push(("Radius", circle.radius.to_string()));
            details.push(("Border Color", circle.border_color.clone()));
            details.push(("Fill Color", circle.fill_color.clone()));
            details.push(("Border Thickness", circle.border_thickness.to_string()));
        }
        Shape::Rectangle(rect) => {
            details.push(("Start Point", point(rect.start_point)));
            details.push(("End Point", point(rect.end_point)));
            details.push(("Border Color", rect.border_color.clone()));
            details.push(("Fill Color", rect.fill_color.clone()));
            details.push(("Border Thickness", rect.border_thickness.to_string()));
        }
        Shape::Text(text) => {
            details.push(("Content", text.content.clone()));
            details.push(("Position", point(text.position)));
            details.push(("Font Size", text.font_size.to_string()));
            details.push(("Color", text.color.clone()));
            details.push(("Font Style", text.font_style.clone()));
        }
        Shape::Unknown => {}
    }
    details
}

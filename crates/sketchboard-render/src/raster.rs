//! Software raster surface backed by a tiny-skia pixmap.

use crate::color::Rgba;
use crate::surface::{FontDescriptor, Surface, SurfaceError, SurfaceResult};
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use kurbo::{BezPath, PathEl, Point, Stroke};
use std::path::Path;
use tiny_skia as sk;

/// Embedded DejaVu Sans, the face used when no font file is configured.
static DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// An anti-aliased RGBA raster of fixed size.
pub struct RasterSurface {
    pixmap: sk::Pixmap,
    font: Option<FontArc>,
    warned_missing_font: bool,
}

impl RasterSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> SurfaceResult<Self> {
        let pixmap =
            sk::Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            font: None,
            warned_missing_font: false,
        })
    }

    /// Use `font` for text shapes.
    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    pub fn set_font(&mut self, font: Option<FontArc>) {
        self.font = font;
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Straight-alpha RGBA bytes, row-major.
    pub fn rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Color of one pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgba::new(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Encode the current contents as PNG.
    pub fn encode_png(&self) -> SurfaceResult<Vec<u8>> {
        encode_png(&self.rgba(), self.pixmap.width(), self.pixmap.height())
    }

    /// Write the current contents to a PNG file.
    pub fn save_png(&self, path: &Path) -> SurfaceResult<()> {
        let data = self.encode_png()?;
        std::fs::write(path, data)
            .map_err(|e| SurfaceError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn draw_glyphs(&mut self, font: &FontArc, text: &str, origin: Point, size: f64, color: Rgba) {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let Some(mut mask) = sk::Mask::new(width, height) else {
            return;
        };

        let scale = PxScale::from(size as f32);
        let scaled = font.as_scaled(scale);
        let baseline = origin.y as f32;
        let mut caret = origin.x as f32;
        let mut previous: Option<GlyphId> = None;
        let mut covered = false;

        let coverage = mask.data_mut();
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, c| {
                let x = bounds.min.x as i64 + i64::from(gx);
                let y = bounds.min.y as i64 + i64::from(gy);
                if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                    return;
                }
                let idx = (y as usize) * (width as usize) + x as usize;
                let value = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
                coverage[idx] = coverage[idx].max(value);
                covered = true;
            });
        }

        if !covered {
            return;
        }
        let Some(area) = sk::Rect::from_xywh(0.0, 0.0, width as f32, height as f32) else {
            return;
        };
        self.pixmap
            .fill_rect(area, &paint(color), sk::Transform::identity(), Some(&mask));
    }
}

/// The bundled sans-serif face.
pub fn default_font() -> SurfaceResult<FontArc> {
    FontArc::try_from_slice(DEJAVU_SANS)
        .map_err(|e| SurfaceError::Font(format!("Invalid bundled font: {}", e)))
}

/// Load a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> SurfaceResult<FontArc> {
    let data = std::fs::read(path)
        .map_err(|e| SurfaceError::Font(format!("Failed to read {}: {}", path.display(), e)))?;
    FontArc::try_from_vec(data)
        .map_err(|e| SurfaceError::Font(format!("Invalid font {}: {}", path.display(), e)))
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> SurfaceResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| SurfaceError::Encode(format!("Failed to write PNG header: {}", e)))?;
        writer
            .write_image_data(rgba_data)
            .map_err(|e| SurfaceError::Encode(format!("Failed to write PNG data: {}", e)))?;
    }
    Ok(png_data)
}

fn paint(color: Rgba) -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path. `None` for paths with nothing to draw.
fn to_skia_path(path: &BezPath) -> Option<sk::Path> {
    let mut builder = sk::PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self) {
        self.pixmap.fill(sk::Color::TRANSPARENT);
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            sk::FillRule::Winding,
            sk::Transform::identity(),
            None,
        );
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Rgba) {
        let Some(path) = to_skia_path(path) else {
            return;
        };
        let stroke = sk::Stroke {
            width: stroke.width as f32,
            miter_limit: 10.0,
            ..sk::Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color),
            &stroke,
            sk::Transform::identity(),
            None,
        );
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: &FontDescriptor, color: Rgba) {
        let Some(face) = self.font.clone() else {
            if !self.warned_missing_font {
                log::warn!("No font configured; text shapes will not be drawn");
                self.warned_missing_font = true;
            }
            return;
        };
        self.draw_glyphs(&face, text, origin, font.size, color);
    }
}

//! Shape rendering.
//!
//! Every function here is a pure mapping from shapes to surface calls: the
//! same input always issues the same calls, whichever view is drawing.

use crate::color;
use crate::surface::{FontDescriptor, Surface};
use kurbo::{BezPath, Stroke};
use sketchboard_core::{DrawingCollection, Shape};

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Committed shapes, painted back to front.
    pub collection: &'a DrawingCollection,
    /// Shape under construction, painted last.
    pub in_progress: Option<&'a Shape>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(collection: &'a DrawingCollection) -> Self {
        Self {
            collection,
            in_progress: None,
        }
    }

    /// Set the in-progress shape.
    pub fn with_in_progress(mut self, shape: Option<&'a Shape>) -> Self {
        self.in_progress = shape;
        self
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &'a Shape> + '_ {
        self.collection.shapes().chain(self.in_progress)
    }
}

/// Clear the surface and paint the whole frame.
pub fn build_scene<S: Surface + ?Sized>(surface: &mut S, ctx: &RenderContext) {
    surface.clear();
    render_shapes(surface, ctx.shapes());
}

/// Clear the surface and paint a single shape.
pub fn render_drawing<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    surface.clear();
    render_shape(surface, shape);
}

/// Paint shapes in order without clearing.
pub fn render_shapes<'s, S, I>(surface: &mut S, shapes: I)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'s Shape>,
{
    for shape in shapes {
        render_shape(surface, shape);
    }
}

/// Paint one shape.
pub fn render_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape) {
    match shape {
        Shape::Line(line) => {
            let stroke = Stroke::new(line.border_thickness);
            surface.stroke_path(
                &line.to_path(),
                &stroke,
                color::resolve_stroke(&line.border_color),
            );
        }
        Shape::Circle(circle) => {
            fill_and_stroke(
                surface,
                &circle.to_path(),
                &circle.fill_color,
                &circle.border_color,
                circle.border_thickness,
            );
        }
        Shape::Rectangle(rect) => {
            fill_and_stroke(
                surface,
                &rect.to_path(),
                &rect.fill_color,
                &rect.border_color,
                rect.border_thickness,
            );
        }
        Shape::Text(text) => {
            let font = FontDescriptor::new(text.font_style.as_str(), text.font_size);
            surface.fill_text(
                &text.content,
                text.position,
                &font,
                color::resolve_stroke(&text.color),
            );
        }
        Shape::Unknown => {
            log::trace!("Skipping shape of unknown kind");
        }
    }
}

fn fill_and_stroke<S: Surface + ?Sized>(
    surface: &mut S,
    path: &BezPath,
    fill: &str,
    border: &str,
    thickness: f64,
) {
    let fill = color::resolve_fill(fill);
    // A transparent fill paints nothing.
    if !fill.is_transparent() {
        surface.fill_path(path, fill);
    }
    surface.stroke_path(path, &Stroke::new(thickness), color::resolve_stroke(border));
}

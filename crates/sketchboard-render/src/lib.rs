//! Sketchboard Render Library
//!
//! Maps shapes to drawing calls on a [`Surface`]. The same renderer serves the
//! authoring view and the gallery, so a stored drawing reproduces exactly what
//! was drawn. [`RasterSurface`] is the software implementation used for PNG
//! output; [`CommandRecorder`] captures the calls for inspection.

pub mod color;
mod raster;
mod renderer;
mod surface;

pub use color::Rgba;
pub use raster::{RasterSurface, default_font, encode_png, load_font};
pub use renderer::{RenderContext, build_scene, render_drawing, render_shape, render_shapes};
pub use surface::{
    CommandRecorder, DrawCommand, FONT_FAMILY, FontDescriptor, Surface, SurfaceError,
    SurfaceResult,
};

pub use ab_glyph::FontArc;

//! Sketchboard App Library
//!
//! Headless application shell around the core and the renderer: the
//! authoring view (editor + surface), the read-only gallery and event-script
//! replay.

mod authoring;
mod config;
mod error;
mod gallery;
pub mod replay;

pub use authoring::AuthoringView;
pub use config::{AppConfig, DEFAULT_SOURCE};
pub use error::{AppError, AppResult};
pub use gallery::{GalleryEntry, GalleryView, describe, thumbnail_name};

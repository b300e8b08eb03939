//! Application errors.

use sketchboard_core::SourceError;
use sketchboard_render::SurfaceError;
use thiserror::Error;

/// Errors reported by the application shell.
///
/// The views never produce these for bad events or bad records; they come
/// from the surroundings: files, fonts, the collection backend.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Collection error: {0}")]
    Source(#[from] SourceError),
    #[error("Invalid event script {path}: {message}")]
    Script { path: String, message: String },
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

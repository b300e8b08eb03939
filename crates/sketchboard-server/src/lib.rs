//! Sketchboard Collection Service
//!
//! Stores drawings and serves them back in insertion order.
//!
//! ## Endpoints
//!
//! ```text
//! GET  /api/drawings   -> 200 [ { "_id": "...", "type": "line", ... }, ... ]
//! POST /api/drawings   <- { "type": "circle", "center": {..}, "radius": 40, ... }
//!                      -> 201 { "_id": "..." }  |  422 { "error": "..." }
//! ```

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};
use sketchboard_core::{Drawing, DrawingStore, Shape, SourceError};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared application state
pub struct AppState {
    store: Box<dyn DrawingStore>,
}

impl AppState {
    pub fn new(store: Box<dyn DrawingStore>) -> Self {
        Self { store }
    }

    /// All drawings. A store that does not exist yet is empty.
    async fn drawings(&self) -> Result<Vec<Drawing>, SourceError> {
        match self.store.fetch_all().await {
            Err(SourceError::NotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }
}

#[derive(Serialize)]
struct Created {
    #[serde(rename = "_id")]
    id: String,
}

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/drawings", get(list_drawings).post(create_drawing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Index page
async fn index() -> &'static str {
    "Sketchboard Collection Service - drawings at /api/drawings"
}

/// Health check
async fn health() -> &'static str {
    "ok"
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_drawings(State(state): State<Arc<AppState>>) -> Response {
    match state.drawings().await {
        Ok(drawings) => Json(drawings).into_response(),
        Err(e) => {
            warn!("Failed to list drawings: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn create_drawing(State(state): State<Arc<AppState>>, Json(record): Json<Value>) -> Response {
    let shape = match Shape::decode(record) {
        Ok(shape) => shape,
        Err(e) => {
            warn!("Rejected drawing: {}", e);
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
        }
    };

    match state.store.append(&shape).await {
        Ok(id) => {
            info!("Stored {} drawing {}", shape.kind_name(), id);
            (StatusCode::CREATED, Json(Created { id })).into_response()
        }
        Err(e) => {
            warn!("Failed to store drawing: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

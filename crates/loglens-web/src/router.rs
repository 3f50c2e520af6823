//! Axum router — maps all URL paths to handlers.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{
    page::home,
    upload::{detect_submit, train_submit},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, max_upload_mb: usize) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(home))
        .route("/train", post(train_submit))
        .route("/detect", post(detect_submit))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(DefaultBodyLimit::max(max_upload_mb * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

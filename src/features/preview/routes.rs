use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::preview::handlers::get_preview;
use crate::features::preview::services::PreviewService;

/// Create routes for the preview feature
pub fn routes(preview_service: Arc<PreviewService>) -> Router {
    Router::new()
        .route("/api/documents/{id}/preview", get(get_preview))
        .with_state(preview_service)
}

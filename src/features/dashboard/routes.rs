use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers::get_summary;
use crate::features::dashboard::services::DashboardService;

/// Create routes for the dashboard feature
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/summary", get(get_summary))
        .with_state(dashboard_service)
}

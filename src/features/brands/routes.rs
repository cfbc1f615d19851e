use axum::{routing::get, Router};

use crate::features::brands::handlers::list_brands;

/// Create routes for the brands feature
pub fn routes() -> Router {
    Router::new().route("/api/brands", get(list_brands))
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::features::brands::models::Brand;
use crate::features::dashboard::dtos::BrandSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Query params for the summary endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    /// Brand to summarize
    pub brand: Brand,
}

/// Get the statistics summary for one brand
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Brand summary", body = ApiResponse<BrandSummaryDto>),
        (status = 400, description = "Unknown brand")
    ),
    tag = "dashboard"
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<ApiResponse<BrandSummaryDto>>> {
    let summary = service.get_summary(query.brand).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

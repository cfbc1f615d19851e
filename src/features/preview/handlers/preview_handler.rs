use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::preview::dtos::{PreviewDescriptorDto, PreviewQuery};
use crate::features::preview::services::PreviewService;
use crate::shared::types::ApiResponse;

/// Get the preview descriptor for a document
///
/// Page and zoom are normalized server-side so every client renders with
/// the same rules.
#[utoipa::path(
    get,
    path = "/api/documents/{id}/preview",
    params(
        ("id" = Uuid, Path, description = "Document id"),
        PreviewQuery
    ),
    responses(
        (status = 200, description = "Preview descriptor", body = ApiResponse<PreviewDescriptorDto>),
        (status = 404, description = "Document not found")
    ),
    tag = "preview"
)]
pub async fn get_preview(
    State(service): State<Arc<PreviewService>>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<ApiResponse<PreviewDescriptorDto>>> {
    let descriptor = service.descriptor(id, query.page, query.zoom).await?;
    Ok(Json(ApiResponse::success(Some(descriptor), None, None)))
}

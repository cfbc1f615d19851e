use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Query params for the preview endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PreviewQuery {
    /// 1-based page to open (default 1; values below 1 are floored)
    pub page: Option<u32>,
    /// Zoom percentage (default 100; clamped to 50-200, snapped to 25% steps)
    pub zoom: Option<u32>,
}

/// What the embedded viewer needs to render a document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreviewDescriptorDto {
    pub document_id: Uuid,
    pub file_name: String,
    /// Content URL with `#page=N&zoom=Z` fragment
    pub url: String,
    pub page: u32,
    pub zoom: u32,
}

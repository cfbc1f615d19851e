use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::brands::models::Brand;

/// Per-brand statistics for the header bar
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BrandSummaryDto {
    pub brand: Brand,
    /// Number of documents the brand holds
    pub total_documents: i64,
    /// Sum of stored document sizes in bytes
    pub total_size_bytes: i64,
    /// Most recent upload or content replacement, if any document exists
    pub last_upload: Option<DateTime<Utc>>,
}

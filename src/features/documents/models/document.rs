use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::brands::models::Brand;

/// A managed SOP document record
///
/// `brand`, `file_category`, `uploaded_by`, and `created_at` are fixed at
/// creation; a content update replaces `file_name`, `file_size`, and
/// `file_path` and touches `modified_at` only.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_category: String,
    pub brand: Brand,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

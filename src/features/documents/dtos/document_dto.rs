use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::brands::models::Brand;
use crate::features::documents::models::Document;
use crate::shared::constants::PDF_MIME_TYPE;

/// Response DTO for document records
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponseDto {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: Uuid,
    /// Display name, taken from the uploaded file
    pub file_name: String,
    /// URL of the stored content
    pub file_path: String,
    /// Size of the stored content in bytes
    pub file_size: i64,
    /// Free-text category supplied at upload time
    pub file_category: String,
    /// Owning brand
    pub brand: Brand,
    /// Free-text uploader name supplied at upload time
    pub uploaded_by: String,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent content replacement
    pub modified_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponseDto {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            file_name: d.file_name,
            file_path: d.file_path,
            file_size: d.file_size,
            file_category: d.file_category,
            brand: d.brand,
            uploaded_by: d.uploaded_by,
            created_at: d.created_at,
            modified_at: d.modified_at,
        }
    }
}

/// Free-text upload metadata, stored verbatim (empty strings allowed)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UploadMetadataDto {
    #[validate(length(max = 255, message = "file_category must be at most 255 characters"))]
    pub file_category: String,
    #[validate(length(max = 255, message = "uploaded_by must be at most 255 characters"))]
    pub uploaded_by: String,
}

/// Single upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadDocumentDto {
    /// The PDF file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Target brand
    #[schema(example = "knitwell")]
    pub brand: String,
    /// Free-text document category
    #[schema(example = "safety")]
    pub file_category: Option<String>,
    /// Free-text uploader name
    #[schema(example = "jane.doe")]
    pub uploaded_by: Option<String>,
}

/// Bulk upload request DTO for OpenAPI documentation
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct BulkUploadDto {
    /// The PDF files to upload (repeated field)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: Vec<String>,
    /// Target brand
    #[schema(example = "chicos")]
    pub brand: String,
    /// Free-text document category
    pub file_category: Option<String>,
    /// Free-text uploader name
    pub uploaded_by: Option<String>,
}

/// Global upload request DTO for OpenAPI documentation
///
/// Every file is fanned out to every brand as an independent record.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct GlobalUploadDto {
    /// The PDF files to upload (repeated field)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: Vec<String>,
    /// Free-text document category
    pub file_category: Option<String>,
    /// Free-text uploader name
    pub uploaded_by: Option<String>,
}

/// Content replacement request DTO for OpenAPI documentation
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UpdateDocumentDto {
    /// The replacement PDF file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteDocumentResponseDto {
    /// Confirmation that the document was deleted
    pub deleted: bool,
}

/// Check whether a MIME type is the one accepted for SOP documents
pub fn is_pdf(content_type: &str) -> bool {
    content_type == PDF_MIME_TYPE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf("application/pdf"));
        assert!(!is_pdf("image/png"));
        assert!(!is_pdf("application/pdf; charset=binary"));
    }

    #[test]
    fn test_metadata_allows_empty_strings() {
        let dto = UploadMetadataDto::default();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_metadata_rejects_oversized_fields() {
        let dto = UploadMetadataDto {
            file_category: "x".repeat(256),
            uploaded_by: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}

use utoipa::{Modify, OpenApi};

use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers, models::Brand};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::documents::{dtos as documents_dtos, handlers as documents_handlers};
use crate::features::preview::{dtos as preview_dtos, handlers as preview_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Brands
        brands_handlers::list_brands,
        // Documents
        documents_handlers::list_documents,
        documents_handlers::upload_document,
        documents_handlers::upload_bulk_documents,
        documents_handlers::upload_global_documents,
        documents_handlers::update_document,
        documents_handlers::delete_document,
        documents_handlers::download_document,
        documents_handlers::serve_file,
        // Preview
        preview_handlers::get_preview,
        // Dashboard
        dashboard_handlers::get_summary,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Brands
            Brand,
            brands_dtos::BrandResponseDto,
            ApiResponse<Vec<brands_dtos::BrandResponseDto>>,
            // Documents
            documents_dtos::DocumentResponseDto,
            documents_dtos::UploadDocumentDto,
            documents_dtos::BulkUploadDto,
            documents_dtos::GlobalUploadDto,
            documents_dtos::UpdateDocumentDto,
            documents_dtos::UploadMetadataDto,
            documents_dtos::DeleteDocumentResponseDto,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            ApiResponse<documents_dtos::DeleteDocumentResponseDto>,
            // Preview
            preview_dtos::PreviewDescriptorDto,
            ApiResponse<preview_dtos::PreviewDescriptorDto>,
            // Dashboard
            dashboard_dtos::BrandSummaryDto,
            ApiResponse<dashboard_dtos::BrandSummaryDto>,
        )
    ),
    tags(
        (name = "brands", description = "Fixed brand enumeration"),
        (name = "documents", description = "SOP document upload and management"),
        (name = "preview", description = "Preview descriptors for the embedded PDF viewer"),
        (name = "dashboard", description = "Per-brand document statistics"),
    ),
    info(
        title = "SopHub API",
        version = "0.1.0",
        description = "API documentation for SopHub",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

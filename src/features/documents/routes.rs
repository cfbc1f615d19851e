use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::features::documents::handlers::{
    delete_document, download_document, list_documents, serve_file, update_document,
    upload_bulk_documents, upload_document, upload_global_documents,
};
use crate::features::documents::services::DocumentService;
use crate::shared::constants::{MAX_BULK_FILES, MAX_FILE_SIZE};

/// Create routes for the documents feature
pub fn routes(document_service: Arc<DocumentService>) -> Router {
    // Allow body size up to the payload cap + buffer for multipart overhead
    let single_limit = MAX_FILE_SIZE + 1024 * 1024;
    let batch_limit = MAX_BULK_FILES * MAX_FILE_SIZE + 1024 * 1024;

    Router::new()
        .route("/api/documents", get(list_documents))
        .route(
            "/api/documents/upload",
            post(upload_document).layer(DefaultBodyLimit::max(single_limit)),
        )
        .route(
            "/api/documents/upload/bulk",
            post(upload_bulk_documents).layer(DefaultBodyLimit::max(batch_limit)),
        )
        .route(
            "/api/documents/upload/global",
            post(upload_global_documents).layer(DefaultBodyLimit::max(batch_limit)),
        )
        .route(
            "/api/documents/{id}",
            put(update_document)
                .delete(delete_document)
                .layer(DefaultBodyLimit::max(single_limit)),
        )
        .route("/api/documents/{id}/download", get(download_document))
        .route("/files/{*key}", get(serve_file))
        .with_state(document_service)
}

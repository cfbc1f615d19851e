use axum::{
    body::Body,
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::brands::models::Brand;
use crate::features::documents::dtos::{
    BulkUploadDto, DeleteDocumentResponseDto, DocumentResponseDto, GlobalUploadDto,
    UpdateDocumentDto, UploadDocumentDto, UploadMetadataDto,
};
use crate::features::documents::services::{DocumentService, UploadMetadata, UploadedFile};
use crate::shared::types::{ApiResponse, Meta};

/// Query params for listing documents
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDocumentsQuery {
    /// Brand whose documents to list
    pub brand: Brand,
}

/// Fields collected from a multipart upload form
#[derive(Default)]
struct UploadForm {
    files: Vec<UploadedFile>,
    brand: Option<String>,
    metadata: UploadMetadataDto,
}

async fn read_text_field(field: Field<'_>, name: &str) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read {} field: {}", name, e)))
}

/// Drain a multipart stream into an [`UploadForm`]
///
/// Accepts `file` and `files` interchangeably for the binary parts so the
/// single and batch forms share one parser. Unknown fields are ignored.
async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" | "files" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                form.files.push(UploadedFile {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "brand" => {
                form.brand = Some(read_text_field(field, "brand").await?);
            }
            "file_category" => {
                form.metadata.file_category = read_text_field(field, "file_category").await?;
            }
            "uploaded_by" => {
                form.metadata.uploaded_by = read_text_field(field, "uploaded_by").await?;
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    form.metadata
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(form)
}

fn parse_brand(value: Option<String>) -> Result<Brand> {
    let value = value.ok_or_else(|| AppError::BadRequest("Brand is required".to_string()))?;
    Brand::from_str(&value).map_err(AppError::Validation)
}

fn into_metadata(dto: UploadMetadataDto) -> UploadMetadata {
    UploadMetadata {
        file_category: dto.file_category,
        uploaded_by: dto.uploaded_by,
    }
}

/// List documents for a brand
#[utoipa::path(
    get,
    path = "/api/documents",
    params(ListDocumentsQuery),
    responses(
        (status = 200, description = "Documents for the brand", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 400, description = "Unknown brand")
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(service): State<Arc<DocumentService>>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>> {
    let documents = service.list(query.brand).await?;
    let total = documents.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(documents),
        None,
        Some(Meta { total }),
    )))
}

/// Upload a single document to one brand
///
/// Accepts multipart/form-data with:
/// - `file`: the PDF to upload (required)
/// - `brand`: target brand (required)
/// - `file_category`, `uploaded_by`: free-text metadata (optional)
#[utoipa::path(
    post,
    path = "/api/documents/upload",
    request_body(
        content = UploadDocumentDto,
        content_type = "multipart/form-data",
        description = "Single document upload form",
    ),
    responses(
        (status = 201, description = "Document uploaded", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Invalid file or missing field")
    ),
    tag = "documents"
)]
pub async fn upload_document(
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>)> {
    let form = read_upload_form(&mut multipart).await?;
    let brand = parse_brand(form.brand)?;
    let file = form
        .files
        .into_iter()
        .next()
        .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let response = service
        .upload_single(file, brand, into_metadata(form.metadata))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(response),
            Some("SOP uploaded successfully".to_string()),
            None,
        )),
    ))
}

/// Upload several documents to one brand
#[utoipa::path(
    post,
    path = "/api/documents/upload/bulk",
    request_body(
        content = BulkUploadDto,
        content_type = "multipart/form-data",
        description = "Bulk upload form; repeat the `files` field per document",
    ),
    responses(
        (status = 201, description = "Documents uploaded", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 400, description = "Invalid files or missing field")
    ),
    tag = "documents"
)]
pub async fn upload_bulk_documents(
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Vec<DocumentResponseDto>>>)> {
    let form = read_upload_form(&mut multipart).await?;
    let brand = parse_brand(form.brand)?;

    let created = service
        .upload_bulk(form.files, brand, into_metadata(form.metadata))
        .await?;
    let total = created.len() as i64;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some(format!("{} SOPs uploaded successfully", total)),
            Some(Meta { total }),
        )),
    ))
}

/// Upload documents to every brand
///
/// Each file is fanned out to every brand as an independent record, so N
/// files produce N x |brands| records.
#[utoipa::path(
    post,
    path = "/api/documents/upload/global",
    request_body(
        content = GlobalUploadDto,
        content_type = "multipart/form-data",
        description = "Global upload form; repeat the `files` field per document",
    ),
    responses(
        (status = 201, description = "Documents uploaded to all brands", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 400, description = "Invalid files")
    ),
    tag = "documents"
)]
pub async fn upload_global_documents(
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Vec<DocumentResponseDto>>>)> {
    let form = read_upload_form(&mut multipart).await?;

    let created = service
        .upload_global(form.files, into_metadata(form.metadata))
        .await?;
    let total = created.len() as i64;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("SOPs uploaded to all brands successfully".to_string()),
            Some(Meta { total }),
        )),
    ))
}

/// Replace a document's content
///
/// Metadata, brand, and creation date are preserved; only the content
/// fields and the modification date change.
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    request_body(
        content = UpdateDocumentDto,
        content_type = "multipart/form-data",
        description = "Replacement file form",
    ),
    responses(
        (status = 200, description = "Document updated", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Invalid file"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn update_document(
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<DocumentResponseDto>>> {
    let form = read_upload_form(&mut multipart).await?;
    let file = form
        .files
        .into_iter()
        .next()
        .ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let response = service.update(id, file).await?;

    Ok(Json(ApiResponse::success(
        Some(response),
        Some("SOP updated successfully".to_string()),
        None,
    )))
}

/// Delete a document
///
/// Deleting an id that is already absent succeeds without effect.
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document deleted", body = ApiResponse<DeleteDocumentResponseDto>),
    ),
    tag = "documents"
)]
pub async fn delete_document(
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteDocumentResponseDto>>> {
    service.delete(id).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteDocumentResponseDto { deleted: true }),
        Some("SOP deleted successfully".to_string()),
        None,
    )))
}

/// Download a document's content as an attachment
#[utoipa::path(
    get,
    path = "/api/documents/{id}/download",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document content", content_type = "application/pdf"),
        (status = 404, description = "Document not found")
    ),
    tag = "documents"
)]
pub async fn download_document(
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let (document, object) = service.download(id).await?;

    // Quotes would break the header value
    let file_name = document.file_name.replace('"', "");

    Response::builder()
        .header(header::CONTENT_TYPE, object.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file_name),
        )
        .body(Body::from(object.data))
        .map_err(|e| AppError::Internal(format!("Failed to build download response: {}", e)))
}

/// Serve stored content inline
///
/// This is what a record's `file_path` points at; the embedded PDF viewer
/// loads pages from here.
#[utoipa::path(
    get,
    path = "/files/{key}",
    params(("key" = String, Path, description = "Stored object key")),
    responses(
        (status = 200, description = "Stored content", content_type = "application/pdf"),
        (status = 404, description = "Object not found")
    ),
    tag = "documents"
)]
pub async fn serve_file(
    State(service): State<Arc<DocumentService>>,
    Path(key): Path<String>,
) -> Result<Response> {
    let object = service.fetch_object(&key).await?;

    Response::builder()
        .header(header::CONTENT_TYPE, object.content_type)
        .body(Body::from(object.data))
        .map_err(|e| AppError::Internal(format!("Failed to build file response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LatencyConfig, StorageConfig};
    use crate::features::documents::routes::routes;
    use crate::features::documents::services::InMemoryDocumentRepository;
    use crate::modules::storage::MemoryBlobStore;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    async fn test_server() -> TestServer {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repository = Arc::new(
            InMemoryDocumentRepository::with_seed_data(blob_store.clone(), LatencyConfig::none())
                .await,
        );
        let service = Arc::new(DocumentService::new(repository, blob_store));
        TestServer::new(routes(service)).unwrap()
    }

    fn pdf_part(file_name: &str) -> Part {
        Part::bytes(b"%PDF-1.4\ntest".to_vec())
            .file_name(file_name)
            .mime_type("application/pdf")
    }

    #[tokio::test]
    async fn test_upload_and_list_round_trip() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_text("brand", "knitwell")
            .add_text("file_category", "safety")
            .add_text("uploaded_by", "jane.doe")
            .add_part("file", pdf_part("Evacuation Plan.pdf"));

        let response = server.post("/api/documents/upload").multipart(form).await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<DocumentResponseDto> = response.json();
        let created = body.data.unwrap();
        assert_eq!(created.file_name, "Evacuation Plan.pdf");
        assert_eq!(created.brand, Brand::Knitwell);
        assert_eq!(created.file_category, "safety");
        assert_eq!(created.uploaded_by, "jane.doe");

        let response = server.get("/api/documents").add_query_param("brand", "knitwell").await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 3);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let server = test_server().await;

        let form = MultipartForm::new().add_text("brand", "knitwell").add_part(
            "file",
            Part::bytes(b"GIF89a".to_vec())
                .file_name("animation.gif")
                .mime_type("image/gif"),
        );

        let response = server.post("/api/documents/upload").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_requires_known_brand() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_text("brand", "soma")
            .add_part("file", pdf_part("a.pdf"));

        let response = server.post("/api/documents/upload").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bulk_upload_creates_one_record_per_file() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_text("brand", "chicos")
            .add_part("files", pdf_part("a.pdf"))
            .add_part("files", pdf_part("b.pdf"));

        let response = server
            .post("/api/documents/upload/bulk")
            .multipart(form)
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        let created = body.data.unwrap();
        assert_eq!(created.len(), 2);
        assert_ne!(created[0].id, created[1].id);
    }

    #[tokio::test]
    async fn test_global_upload_fans_out_to_every_brand() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_part("files", pdf_part("f1.pdf"))
            .add_part("files", pdf_part("f2.pdf"));

        let response = server
            .post("/api/documents/upload/global")
            .multipart(form)
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 6);

        // chicos had 1 seed document, now 3
        let response = server.get("/api/documents").add_query_param("brand", "chicos").await;
        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let server = test_server().await;

        let form = MultipartForm::new().add_part("file", pdf_part("new.pdf"));
        let response = server
            .put(&format!("/api/documents/{}", Uuid::new_v4()))
            .multipart(form)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_then_relist_and_idempotent_redelete() {
        let server = test_server().await;

        let response = server.get("/api/documents").add_query_param("brand", "talbots").await;
        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        let target = body.data.unwrap().remove(0);

        let response = server
            .delete(&format!("/api/documents/{}", target.id))
            .await;
        response.assert_status_ok();

        let response = server.get("/api/documents").add_query_param("brand", "talbots").await;
        let body: ApiResponse<Vec<DocumentResponseDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 0);

        // Deleting again still succeeds
        let response = server
            .delete(&format!("/api/documents/{}", target.id))
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_download_streams_stored_content() {
        let server = test_server().await;

        let form = MultipartForm::new()
            .add_text("brand", "talbots")
            .add_part("file", pdf_part("Fitting Guide.pdf"));
        let response = server.post("/api/documents/upload").multipart(form).await;
        let body: ApiResponse<DocumentResponseDto> = response.json();
        let created = body.data.unwrap();

        let response = server
            .get(&format!("/api/documents/{}/download", created.id))
            .await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"%PDF-1.4\ntest");
    }
}

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::brands::models::Brand;
use crate::features::documents::dtos::{is_pdf, DocumentResponseDto};
use crate::features::documents::models::Document;
use crate::features::documents::services::repository::{
    DocumentRepository, UploadMetadata, UploadedFile,
};
use crate::modules::storage::{MemoryBlobStore, StoredObject};
use crate::shared::constants::{MAX_BULK_FILES, MAX_FILE_SIZE};

/// Service for document operations
///
/// Validates uploads and mediates between the HTTP surface, the repository,
/// and the blob store. The repository owns all record state.
pub struct DocumentService {
    repository: Arc<dyn DocumentRepository>,
    blob_store: Arc<MemoryBlobStore>,
}

impl DocumentService {
    pub fn new(repository: Arc<dyn DocumentRepository>, blob_store: Arc<MemoryBlobStore>) -> Self {
        Self {
            repository,
            blob_store,
        }
    }

    pub async fn list(&self, brand: Brand) -> Result<Vec<DocumentResponseDto>> {
        let documents = self.repository.list(brand).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub async fn upload_single(
        &self,
        file: UploadedFile,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<DocumentResponseDto> {
        Self::validate_file(&file)?;
        let document = self.repository.create_single(file, brand, metadata).await?;
        Ok(document.into())
    }

    pub async fn upload_bulk(
        &self,
        files: Vec<UploadedFile>,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<Vec<DocumentResponseDto>> {
        Self::validate_batch(&files)?;
        let documents = self.repository.create_bulk(files, brand, metadata).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub async fn upload_global(
        &self,
        files: Vec<UploadedFile>,
        metadata: UploadMetadata,
    ) -> Result<Vec<DocumentResponseDto>> {
        Self::validate_batch(&files)?;
        let documents = self.repository.create_global(files, metadata).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: Uuid, file: UploadedFile) -> Result<DocumentResponseDto> {
        Self::validate_file(&file)?;
        let document = self.repository.update(id, file).await?;
        Ok(document.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await
    }

    /// Resolve a record and its stored content for download
    pub async fn download(&self, id: Uuid) -> Result<(Document, StoredObject)> {
        let document = self.repository.get(id).await?;
        let key = self
            .blob_store
            .key_from_url(&document.file_path)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Document '{}' has an unresolvable content path",
                    document.id
                ))
            })?;
        let object = self.blob_store.fetch(&key).await?;
        debug!("Serving download: id={}, key={}", document.id, key);
        Ok((document, object))
    }

    /// Fetch raw stored content by object key (the `/files/{key}` surface)
    pub async fn fetch_object(&self, key: &str) -> Result<StoredObject> {
        self.blob_store.fetch(key).await
    }

    fn validate_file(file: &UploadedFile) -> Result<()> {
        if file.file_name.is_empty() {
            return Err(AppError::Validation("File name is required".to_string()));
        }
        if !is_pdf(&file.content_type) {
            return Err(AppError::Validation(format!(
                "File type '{}' is not allowed. Only application/pdf is accepted",
                file.content_type
            )));
        }
        if file.data.len() > MAX_FILE_SIZE {
            return Err(AppError::Validation(format!(
                "File too large. Maximum size is {} bytes ({} MB)",
                MAX_FILE_SIZE,
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }
        Ok(())
    }

    fn validate_batch(files: &[UploadedFile]) -> Result<()> {
        if files.is_empty() {
            return Err(AppError::Validation(
                "At least one file is required".to_string(),
            ));
        }
        if files.len() > MAX_BULK_FILES {
            return Err(AppError::Validation(format!(
                "Too many files. At most {} files per upload",
                MAX_BULK_FILES
            )));
        }
        for file in files {
            Self::validate_file(file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LatencyConfig, StorageConfig};
    use crate::features::documents::services::InMemoryDocumentRepository;
    use crate::shared::test_helpers::{pdf_upload, upload_metadata};

    fn service() -> DocumentService {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repository = Arc::new(InMemoryDocumentRepository::new(
            blob_store.clone(),
            LatencyConfig::none(),
        ));
        DocumentService::new(repository, blob_store)
    }

    #[tokio::test]
    async fn test_rejects_non_pdf_upload() {
        let service = service();
        let mut file = pdf_upload("photo.png", 32);
        file.content_type = "image/png".to_string();

        let result = service
            .upload_single(file, Brand::Knitwell, upload_metadata("", ""))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(service.list(Brand::Knitwell).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_oversized_upload() {
        let service = service();
        let file = pdf_upload("big.pdf", MAX_FILE_SIZE + 1);

        let result = service
            .upload_single(file, Brand::Chicos, upload_metadata("", ""))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_rejects_empty_and_oversized_batches() {
        let service = service();

        let result = service
            .upload_bulk(Vec::new(), Brand::Talbots, upload_metadata("", ""))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let files: Vec<_> = (0..MAX_BULK_FILES + 1)
            .map(|i| pdf_upload(&format!("f{}.pdf", i), 8))
            .collect();
        let result = service
            .upload_bulk(files, Brand::Talbots, upload_metadata("", ""))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_download_round_trip() {
        let service = service();
        let created = service
            .upload_single(
                pdf_upload("Returns.pdf", 40),
                Brand::Talbots,
                upload_metadata("ops", "jane"),
            )
            .await
            .unwrap();

        let (document, object) = service.download(created.id).await.unwrap();
        assert_eq!(document.file_name, "Returns.pdf");
        assert_eq!(object.content_type, "application/pdf");
        assert_eq!(object.data.len(), 40);
    }

    #[tokio::test]
    async fn test_download_unknown_id_is_not_found() {
        let service = service();
        let result = service.download(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::LatencyConfig;
use crate::core::error::{AppError, Result};
use crate::features::brands::models::Brand;
use crate::features::documents::models::Document;
use crate::features::documents::services::repository::{
    DocumentRepository, UploadMetadata, UploadedFile,
};
use crate::modules::storage::MemoryBlobStore;

/// In-memory implementation of [`DocumentRepository`]
///
/// One instance per process owns the whole collection. Every operation
/// acquires the collection lock for its full critical section, so mutations
/// are visible to any read that starts after the write resolves. The
/// configured latency runs before state is touched; a suspended caller never
/// observes a half-applied mutation.
pub struct InMemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
    blob_store: Arc<MemoryBlobStore>,
    latency: LatencyConfig,
}

impl InMemoryDocumentRepository {
    pub fn new(blob_store: Arc<MemoryBlobStore>, latency: LatencyConfig) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            blob_store,
            latency,
        }
    }

    /// Repository pre-populated with the demo document set
    pub async fn with_seed_data(blob_store: Arc<MemoryBlobStore>, latency: LatencyConfig) -> Self {
        let repo = Self::new(blob_store, latency);

        let seeds: [(&str, i64, Brand, &str, (i32, u32, u32)); 4] = [
            (
                "Employee Handbook 2024.pdf",
                2_457_600,
                Brand::Knitwell,
                "Human Resources",
                (2024, 1, 15),
            ),
            (
                "Safety Procedures.pdf",
                1_536_000,
                Brand::Knitwell,
                "Safety",
                (2024, 1, 20),
            ),
            (
                "Quality Control Standards.pdf",
                3_072_000,
                Brand::Chicos,
                "Quality",
                (2024, 2, 1),
            ),
            (
                "Customer Service Protocol.pdf",
                1_843_200,
                Brand::Talbots,
                "Customer Service",
                (2024, 2, 10),
            ),
        ];

        {
            let mut documents = repo.documents.write().await;
            for (file_name, file_size, brand, category, (y, m, d)) in seeds {
                let key = repo.blob_store.generate_key(brand.as_str(), file_name);
                // Placeholder content; the record advertises the real size
                repo.blob_store
                    .upload(&key, b"%PDF-1.4\n%seed\n".to_vec(), "application/pdf")
                    .await
                    .ok();

                let date = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
                documents.push(Document {
                    id: Uuid::new_v4(),
                    file_name: file_name.to_string(),
                    file_path: repo.blob_store.file_url(&key),
                    file_size,
                    file_category: category.to_string(),
                    brand,
                    uploaded_by: "system".to_string(),
                    created_at: date,
                    modified_at: date,
                });
            }
        }

        info!("Document repository seeded with demo data");
        repo
    }

    async fn simulate_latency(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    /// Store content and build the record for one (file, brand) pair
    async fn build_record(
        &self,
        file: &UploadedFile,
        brand: Brand,
        metadata: &UploadMetadata,
    ) -> Result<Document> {
        let key = self.blob_store.generate_key(brand.as_str(), &file.file_name);
        self.blob_store
            .upload(&key, file.data.clone(), &file.content_type)
            .await?;

        let now = Utc::now();
        Ok(Document {
            id: Uuid::new_v4(),
            file_name: file.file_name.clone(),
            file_path: self.blob_store.file_url(&key),
            file_size: file.size(),
            file_category: metadata.file_category.clone(),
            brand,
            uploaded_by: metadata.uploaded_by.clone(),
            created_at: now,
            modified_at: now,
        })
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn list(&self, brand: Brand) -> Result<Vec<Document>> {
        self.simulate_latency(self.latency.list_ms).await;

        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| d.brand == brand)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Document> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Document '{}' not found", id)))
    }

    async fn create_single(
        &self,
        file: UploadedFile,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<Document> {
        self.simulate_latency(self.latency.single_ms).await;

        let document = self.build_record(&file, brand, &metadata).await?;

        let mut documents = self.documents.write().await;
        documents.push(document.clone());
        info!(
            "Document created: id={}, brand={}, name={}",
            document.id, document.brand, document.file_name
        );
        Ok(document)
    }

    async fn create_bulk(
        &self,
        files: Vec<UploadedFile>,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<Vec<Document>> {
        self.simulate_latency(self.latency.bulk_ms).await;

        let mut created = Vec::with_capacity(files.len());
        for file in &files {
            created.push(self.build_record(file, brand, &metadata).await?);
        }

        let mut documents = self.documents.write().await;
        documents.extend(created.iter().cloned());
        info!("Bulk upload: {} documents created for {}", created.len(), brand);
        Ok(created)
    }

    async fn create_global(
        &self,
        files: Vec<UploadedFile>,
        metadata: UploadMetadata,
    ) -> Result<Vec<Document>> {
        self.simulate_latency(self.latency.global_ms).await;

        // One independent record (and content copy) per (file, brand) pair,
        // so removing one brand's copy can never touch another's.
        let mut created = Vec::with_capacity(files.len() * Brand::ALL.len());
        for brand in Brand::ALL {
            for file in &files {
                created.push(self.build_record(file, brand, &metadata).await?);
            }
        }

        let mut documents = self.documents.write().await;
        documents.extend(created.iter().cloned());
        info!(
            "Global upload: {} documents created across {} brands",
            created.len(),
            Brand::ALL.len()
        );
        Ok(created)
    }

    async fn update(&self, id: Uuid, file: UploadedFile) -> Result<Document> {
        self.simulate_latency(self.latency.single_ms).await;

        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Document '{}' not found", id)))?;

        let key = self
            .blob_store
            .generate_key(document.brand.as_str(), &file.file_name);
        self.blob_store
            .upload(&key, file.data.clone(), &file.content_type)
            .await?;

        let old_key = self.blob_store.key_from_url(&document.file_path);

        document.file_size = file.size();
        document.file_name = file.file_name;
        document.file_path = self.blob_store.file_url(&key);
        document.modified_at = Utc::now();
        let updated = document.clone();
        drop(documents);

        if let Some(old_key) = old_key {
            self.blob_store.delete(&old_key).await?;
        }

        info!("Document updated: id={}, name={}", updated.id, updated.file_name);
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.simulate_latency(self.latency.delete_ms).await;

        let mut documents = self.documents.write().await;
        let Some(index) = documents.iter().position(|d| d.id == id) else {
            debug!("Delete of absent document ignored: id={}", id);
            return Ok(());
        };

        let removed = documents.remove(index);
        drop(documents);

        if let Some(key) = self.blob_store.key_from_url(&removed.file_path) {
            self.blob_store.delete(&key).await?;
        }

        info!("Document deleted: id={}, name={}", removed.id, removed.file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StorageConfig;
    use crate::shared::test_helpers::{pdf_upload, upload_metadata};

    async fn seeded_repo() -> (InMemoryDocumentRepository, Arc<MemoryBlobStore>) {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repo =
            InMemoryDocumentRepository::with_seed_data(blob_store.clone(), LatencyConfig::none())
                .await;
        (repo, blob_store)
    }

    fn empty_repo() -> InMemoryDocumentRepository {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        InMemoryDocumentRepository::new(blob_store, LatencyConfig::none())
    }

    #[tokio::test]
    async fn test_list_filters_by_brand() {
        let (repo, _) = seeded_repo().await;

        for brand in Brand::ALL {
            let documents = repo.list(brand).await.unwrap();
            assert!(documents.iter().all(|d| d.brand == brand));
        }

        assert_eq!(repo.list(Brand::Knitwell).await.unwrap().len(), 2);
        assert_eq!(repo.list(Brand::Chicos).await.unwrap().len(), 1);
        assert_eq!(repo.list(Brand::Talbots).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_unknown_brand_is_empty_not_error() {
        let repo = empty_repo();
        assert!(repo.list(Brand::Chicos).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_single_stores_metadata_verbatim() {
        let repo = empty_repo();

        let created = repo
            .create_single(
                pdf_upload("Returns Policy.pdf", 64),
                Brand::Talbots,
                upload_metadata("", ""),
            )
            .await
            .unwrap();

        assert_eq!(created.file_name, "Returns Policy.pdf");
        assert_eq!(created.file_size, 64);
        assert_eq!(created.brand, Brand::Talbots);
        assert_eq!(created.file_category, "");
        assert_eq!(created.uploaded_by, "");
        assert_eq!(created.created_at, created.modified_at);

        let listed = repo.list(Brand::Talbots).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_bulk_preserves_order_and_distinct_ids() {
        let repo = empty_repo();
        let files = vec![
            pdf_upload("a.pdf", 10),
            pdf_upload("b.pdf", 20),
            pdf_upload("c.pdf", 30),
        ];

        let created = repo
            .create_bulk(files, Brand::Chicos, upload_metadata("ops", "jane"))
            .await
            .unwrap();

        assert_eq!(created.len(), 3);
        assert_eq!(created[0].file_name, "a.pdf");
        assert_eq!(created[1].file_name, "b.pdf");
        assert_eq!(created[2].file_name, "c.pdf");

        let mut ids: Vec<Uuid> = created.iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_create_global_fans_out_to_every_brand() {
        let repo = empty_repo();
        let files = vec![pdf_upload("f1.pdf", 10), pdf_upload("f2.pdf", 20)];

        let created = repo
            .create_global(files, upload_metadata("ops", "jane"))
            .await
            .unwrap();

        assert_eq!(created.len(), 6);
        for brand in Brand::ALL {
            assert_eq!(created.iter().filter(|d| d.brand == brand).count(), 2);
        }

        let mut ids: Vec<Uuid> = created.iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[tokio::test]
    async fn test_global_copies_are_independent() {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repo = InMemoryDocumentRepository::new(blob_store.clone(), LatencyConfig::none());

        let created = repo
            .create_global(vec![pdf_upload("shared.pdf", 10)], UploadMetadata::default())
            .await
            .unwrap();

        // Delete the knitwell copy; the other brands' content must survive
        let knitwell = created.iter().find(|d| d.brand == Brand::Knitwell).unwrap();
        repo.delete(knitwell.id).await.unwrap();

        for document in created.iter().filter(|d| d.brand != Brand::Knitwell) {
            let key = blob_store.key_from_url(&document.file_path).unwrap();
            assert!(blob_store.fetch(&key).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_update_replaces_content_fields_only() {
        let (repo, _) = seeded_repo().await;
        let before = repo.list(Brand::Knitwell).await.unwrap();
        let target = before[0].clone();

        let updated = repo
            .update(target.id, pdf_upload("Employee Handbook 2025.pdf", 128))
            .await
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.brand, target.brand);
        assert_eq!(updated.file_category, target.file_category);
        assert_eq!(updated.uploaded_by, target.uploaded_by);
        assert_eq!(updated.created_at, target.created_at);

        assert_eq!(updated.file_name, "Employee Handbook 2025.pdf");
        assert_eq!(updated.file_size, 128);
        assert_ne!(updated.file_path, target.file_path);
        assert!(updated.modified_at > target.modified_at);

        // Still exactly two knitwell documents
        assert_eq!(repo.list(Brand::Knitwell).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails_and_leaves_collection_unchanged() {
        let (repo, _) = seeded_repo().await;

        let result = repo.update(Uuid::new_v4(), pdf_upload("x.pdf", 1)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        assert_eq!(repo.list(Brand::Knitwell).await.unwrap().len(), 2);
        assert_eq!(repo.list(Brand::Chicos).await.unwrap().len(), 1);
        assert_eq!(repo.list(Brand::Talbots).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_is_idempotent() {
        let (repo, _) = seeded_repo().await;
        let before = repo.list(Brand::Knitwell).await.unwrap();
        let target = before[0].clone();

        repo.delete(target.id).await.unwrap();

        let after = repo.list(Brand::Knitwell).await.unwrap();
        assert_eq!(after.len(), 1);
        assert!(after.iter().all(|d| d.id != target.id));

        // Second delete of the same id is a no-op
        repo.delete(target.id).await.unwrap();
        assert_eq!(repo.list(Brand::Knitwell).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_brand_switch_round_trip_is_stable() {
        let (repo, _) = seeded_repo().await;

        let first = repo.list(Brand::Knitwell).await.unwrap();
        repo.list(Brand::Chicos).await.unwrap();
        let second = repo.list(Brand::Knitwell).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        let first_ids: Vec<Uuid> = first.iter().map(|d| d.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|d| d.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_latency_is_applied() {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let latency = LatencyConfig {
            list_ms: 500,
            ..LatencyConfig::none()
        };
        let repo = InMemoryDocumentRepository::new(blob_store, latency);

        let start = tokio::time::Instant::now();
        repo.list(Brand::Knitwell).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}

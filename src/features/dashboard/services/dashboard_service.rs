use std::sync::Arc;

use crate::core::error::Result;
use crate::features::brands::models::Brand;
use crate::features::dashboard::dtos::BrandSummaryDto;
use crate::features::documents::services::DocumentRepository;

/// Service for brand statistics
///
/// Everything here is a derived projection over the repository; nothing is
/// cached between calls.
pub struct DashboardService {
    repository: Arc<dyn DocumentRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Summary for one brand: document count, stored bytes, last upload date
    pub async fn get_summary(&self, brand: Brand) -> Result<BrandSummaryDto> {
        let documents = self.repository.list(brand).await?;

        let total_documents = documents.len() as i64;
        let total_size_bytes = documents.iter().map(|d| d.file_size).sum();
        let last_upload = documents.iter().map(|d| d.modified_at).max();

        Ok(BrandSummaryDto {
            brand,
            total_documents,
            total_size_bytes,
            last_upload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{LatencyConfig, StorageConfig};
    use crate::features::documents::services::InMemoryDocumentRepository;
    use crate::modules::storage::MemoryBlobStore;
    use chrono::{TimeZone, Utc};

    async fn service() -> DashboardService {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repository = Arc::new(
            InMemoryDocumentRepository::with_seed_data(blob_store, LatencyConfig::none()).await,
        );
        DashboardService::new(repository)
    }

    #[tokio::test]
    async fn test_summary_aggregates_seed_data() {
        let service = service().await;

        let summary = service.get_summary(Brand::Knitwell).await.unwrap();
        assert_eq!(summary.total_documents, 2);
        assert_eq!(summary.total_size_bytes, 2_457_600 + 1_536_000);
        assert_eq!(
            summary.last_upload,
            Some(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn test_summary_of_empty_brand() {
        let blob_store = Arc::new(MemoryBlobStore::new(StorageConfig {
            public_base_url: String::new(),
        }));
        let repository = Arc::new(InMemoryDocumentRepository::new(
            blob_store,
            LatencyConfig::none(),
        ));
        let service = DashboardService::new(repository);

        let summary = service.get_summary(Brand::Chicos).await.unwrap();
        assert_eq!(summary.total_documents, 0);
        assert_eq!(summary.total_size_bytes, 0);
        assert_eq!(summary.last_upload, None);
    }
}

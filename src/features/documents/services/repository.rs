use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::brands::models::Brand;
use crate::features::documents::models::Document;

/// A file received from the upload surface
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> i64 {
        self.data.len() as i64
    }
}

/// Free-text metadata captured by the upload form, stored verbatim
#[derive(Debug, Clone, Default)]
pub struct UploadMetadata {
    pub file_category: String,
    pub uploaded_by: String,
}

/// Sole authority over the document collection.
///
/// All reads and writes pass through one implementation of this trait; the
/// per-brand lists held by callers are disposable projections. Ids are
/// unique across the whole collection, not per brand.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// All records belonging to `brand`, in insertion order.
    /// A brand with no records yields an empty list, never an error.
    async fn list(&self, brand: Brand) -> Result<Vec<Document>>;

    /// Resolve a single record by id
    async fn get(&self, id: Uuid) -> Result<Document>;

    /// Create one record for one brand
    async fn create_single(
        &self,
        file: UploadedFile,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<Document>;

    /// Create one record per file for one brand; returned records preserve
    /// the input file order and carry pairwise-distinct ids
    async fn create_bulk(
        &self,
        files: Vec<UploadedFile>,
        brand: Brand,
        metadata: UploadMetadata,
    ) -> Result<Vec<Document>>;

    /// Create one independent record per (file, brand) pair across the whole
    /// brand enumeration; output length is `files.len() * Brand::ALL.len()`
    async fn create_global(
        &self,
        files: Vec<UploadedFile>,
        metadata: UploadMetadata,
    ) -> Result<Vec<Document>>;

    /// Replace a record's content: `file_name`, `file_size`, `file_path`,
    /// and `modified_at` change; everything else is preserved
    async fn update(&self, id: Uuid, file: UploadedFile) -> Result<Document>;

    /// Remove a record; deleting an absent id is a no-op
    async fn delete(&self, id: Uuid) -> Result<()>;
}

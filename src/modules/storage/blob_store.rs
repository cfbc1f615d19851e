use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};
use crate::shared::validation::slugify_file_name;

/// A stored blob: raw bytes plus the MIME type they were uploaded with
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory blob store for document content
///
/// Keys follow the `sops/{prefix}/{uuid}-{slug}.pdf` convention; the uuid
/// guarantees uniqueness, the slug keeps keys readable in logs.
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, StoredObject>>,
    public_base_url: String,
}

impl MemoryBlobStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            public_base_url: config.public_base_url,
        }
    }

    /// Generate a fresh object key under the given prefix (one per brand)
    pub fn generate_key(&self, prefix: &str, file_name: &str) -> String {
        let slug = slugify_file_name(file_name);
        if slug.is_empty() {
            format!("sops/{}/{}.pdf", prefix, Uuid::new_v4())
        } else {
            format!("sops/{}/{}-{}.pdf", prefix, Uuid::new_v4(), slug)
        }
    }

    pub async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        let mut objects = self.objects.write().await;
        debug!("Storing blob: key={}, size={}", key, data.len());
        objects.insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    pub async fn fetch(&self, key: &str) -> Result<StoredObject> {
        let objects = self.objects.read().await;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Stored object '{}' not found", key)))
    }

    /// Remove a blob; removing an absent key is a no-op
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut objects = self.objects.write().await;
        if objects.remove(key).is_none() {
            debug!("Delete of absent blob ignored: key={}", key);
        }
        Ok(())
    }

    /// Public URL for a stored object, the value recorded as `file_path`
    pub fn file_url(&self, key: &str) -> String {
        format!("{}/files/{}", self.public_base_url, key)
    }

    /// Inverse of [`file_url`]: recover the object key from a stored path
    pub fn key_from_url(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .and_then(|rest| rest.strip_prefix("/files/"))
            .map(|key| key.to_string())
    }
}

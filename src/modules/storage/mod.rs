//! Storage module for document content
//!
//! Provides an in-memory blob store for uploaded document bytes. The store
//! exposes the same surface a MinIO/S3 client would (key generation, upload,
//! fetch, delete, public URLs), so a real object store can replace it behind
//! the repository without touching the features built on top.

mod blob_store;

pub use blob_store::{MemoryBlobStore, StoredObject};

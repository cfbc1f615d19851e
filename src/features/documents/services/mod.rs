mod document_service;
mod memory_repository;
mod repository;

pub use document_service::DocumentService;
pub use memory_repository::InMemoryDocumentRepository;
pub use repository::{DocumentRepository, UploadMetadata, UploadedFile};

//! SOP document management feature.
//!
//! Owns the document record model, the repository abstraction over the
//! canonical collection, and the upload surface. Three upload modes exist:
//! single (one file, one brand), bulk (many files, one brand), and global
//! (many files fanned out to every brand as independent copies).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/documents?brand=` | List documents for a brand |
//! | POST | `/api/documents/upload` | Upload a single document |
//! | POST | `/api/documents/upload/bulk` | Upload several documents to one brand |
//! | POST | `/api/documents/upload/global` | Upload documents to every brand |
//! | PUT | `/api/documents/{id}` | Replace a document's content |
//! | DELETE | `/api/documents/{id}` | Delete a document |
//! | GET | `/api/documents/{id}/download` | Download document content |
//! | GET | `/files/{*key}` | Serve stored content inline |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{DocumentRepository, DocumentService, InMemoryDocumentRepository};

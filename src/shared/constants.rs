/// Only MIME type accepted for SOP documents
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Maximum size of a single uploaded document in bytes (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum number of files accepted by a bulk or global upload request
pub const MAX_BULK_FILES: usize = 10;

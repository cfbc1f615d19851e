#[cfg(test)]
use crate::features::documents::services::{UploadMetadata, UploadedFile};

#[cfg(test)]
pub fn pdf_upload(file_name: &str, size: usize) -> UploadedFile {
    let mut data = b"%PDF-1.4\n".to_vec();
    data.resize(size.max(data.len()), 0);
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        data,
    }
}

#[cfg(test)]
pub fn upload_metadata(file_category: &str, uploaded_by: &str) -> UploadMetadata {
    UploadMetadata {
        file_category: file_category.to_string(),
        uploaded_by: uploaded_by.to_string(),
    }
}

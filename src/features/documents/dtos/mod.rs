mod document_dto;

pub use document_dto::{
    is_pdf, BulkUploadDto, DeleteDocumentResponseDto, DocumentResponseDto, GlobalUploadDto,
    UpdateDocumentDto, UploadDocumentDto, UploadMetadataDto,
};

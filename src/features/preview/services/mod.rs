mod preview_service;

pub use preview_service::PreviewService;

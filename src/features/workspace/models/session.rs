use crate::features::brands::models::Brand;
use crate::features::documents::models::Document;

/// How an upload is distributed across brands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum UploadMode {
    /// One file into the selected brand
    Single,
    /// Several files into the selected brand
    Bulk,
    /// Several files into every brand
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A queued message for the transient notification surface
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[allow(dead_code)]
impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Snapshot of one management session
///
/// `documents` is a disposable projection of the repository for
/// `selected_brand`; it is only ever replaced wholesale by a reload.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct WorkspaceState {
    pub selected_brand: Brand,
    pub documents: Vec<Document>,
    pub search_query: String,
    pub loading: bool,

    pub uploading: bool,
    pub updating: bool,
    pub deleting: bool,

    pub upload_modal_open: bool,
    pub update_modal_open: bool,
    pub delete_dialog_open: bool,
    pub preview_modal_open: bool,

    /// Document the update/delete/preview dialogs are acting on
    pub selected_document: Option<Document>,

    pub notifications: Vec<Notification>,
}

#[allow(dead_code)]
impl WorkspaceState {
    pub fn new(selected_brand: Brand) -> Self {
        Self {
            selected_brand,
            documents: Vec::new(),
            search_query: String::new(),
            loading: false,
            uploading: false,
            updating: false,
            deleting: false,
            upload_modal_open: false,
            update_modal_open: false,
            delete_dialog_open: false,
            preview_modal_open: false,
            selected_document: None,
            notifications: Vec::new(),
        }
    }
}

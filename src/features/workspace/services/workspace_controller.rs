use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::features::brands::models::Brand;
use crate::features::documents::models::Document;
use crate::features::documents::services::{DocumentRepository, UploadMetadata, UploadedFile};
use crate::features::workspace::models::{Notification, UploadMode, WorkspaceState};

/// Mediator between interface actions and the document repository
///
/// One interaction of each kind (upload/update/delete) may be in flight at a
/// time; the interface disables the triggering control while its flag is
/// set, and the controller ignores a second submission should one slip
/// through. Failures queue an error notification and leave every other piece
/// of state exactly as it was.
#[allow(dead_code)]
pub struct WorkspaceController {
    repository: Arc<dyn DocumentRepository>,
    state: RwLock<WorkspaceState>,
    /// Generation counter for reloads: a finished reload only applies if no
    /// newer reload has started, so a slow response for a previously
    /// selected brand can never overwrite the current brand's list
    load_generation: AtomicU64,
}

#[allow(dead_code)]
impl WorkspaceController {
    pub fn new(repository: Arc<dyn DocumentRepository>, initial_brand: Brand) -> Self {
        Self {
            repository,
            state: RwLock::new(WorkspaceState::new(initial_brand)),
            load_generation: AtomicU64::new(0),
        }
    }

    /// Clone of the current session state
    pub async fn snapshot(&self) -> WorkspaceState {
        self.state.read().await.clone()
    }

    /// Drain queued notifications for the toast surface
    pub async fn take_notifications(&self) -> Vec<Notification> {
        let mut state = self.state.write().await;
        std::mem::take(&mut state.notifications)
    }

    /// Switch brands and reload; the previous list is discarded, not cached
    pub async fn select_brand(&self, brand: Brand) {
        {
            let mut state = self.state.write().await;
            state.selected_brand = brand;
        }
        self.reload().await;
    }

    /// Re-fetch the current brand's list
    pub async fn refresh(&self) {
        self.reload().await;
    }

    async fn reload(&self) {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let brand = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.selected_brand
        };

        let result = self.repository.list(brand).await;

        let mut state = self.state.write().await;
        if generation != self.load_generation.load(Ordering::SeqCst) {
            // A newer reload owns the list now; it will clear `loading`
            debug!("Discarding stale reload for brand {}", brand);
            return;
        }

        state.loading = false;
        match result {
            Ok(documents) => state.documents = documents,
            Err(e) => {
                warn!("Failed to load documents for {}: {}", brand, e);
                state.notifications.push(Notification::error("Failed to load SOPs"));
            }
        }
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.state.write().await;
        state.search_query = query.into();
    }

    /// The document list with the search filter applied
    ///
    /// Case-insensitive substring match over the file name; purely a client
    /// projection, recomputed on demand.
    pub async fn visible_documents(&self) -> Vec<Document> {
        let state = self.state.read().await;
        let needle = state.search_query.to_lowercase();
        state
            .documents
            .iter()
            .filter(|d| d.file_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub async fn open_upload_modal(&self) {
        self.state.write().await.upload_modal_open = true;
    }

    pub async fn close_upload_modal(&self) {
        self.state.write().await.upload_modal_open = false;
    }

    /// Open the update dialog for an explicit target document
    pub async fn open_update_modal(&self, document: Document) {
        let mut state = self.state.write().await;
        state.selected_document = Some(document);
        state.update_modal_open = true;
    }

    pub async fn close_update_modal(&self) {
        let mut state = self.state.write().await;
        state.update_modal_open = false;
        state.selected_document = None;
    }

    /// Open the delete confirmation for an explicit target document
    pub async fn open_delete_dialog(&self, document: Document) {
        let mut state = self.state.write().await;
        state.selected_document = Some(document);
        state.delete_dialog_open = true;
    }

    pub async fn close_delete_dialog(&self) {
        let mut state = self.state.write().await;
        state.delete_dialog_open = false;
        state.selected_document = None;
    }

    pub async fn open_preview(&self, document: Document) {
        let mut state = self.state.write().await;
        state.selected_document = Some(document);
        state.preview_modal_open = true;
    }

    pub async fn close_preview(&self) {
        let mut state = self.state.write().await;
        state.preview_modal_open = false;
        state.selected_document = None;
    }

    /// Run an upload in the selected mode
    ///
    /// On success the upload modal closes and the list reloads; on failure
    /// the modal stays open with the form intact.
    pub async fn upload(
        &self,
        mode: UploadMode,
        files: Vec<UploadedFile>,
        metadata: UploadMetadata,
    ) {
        {
            let mut state = self.state.write().await;
            if state.uploading {
                debug!("Upload already in flight, ignoring");
                return;
            }
            state.uploading = true;
        }

        let brand = self.state.read().await.selected_brand;

        let result = match mode {
            UploadMode::Single => match files.into_iter().next() {
                Some(file) => self
                    .repository
                    .create_single(file, brand, metadata)
                    .await
                    .map(|_| "SOP uploaded successfully".to_string()),
                None => {
                    let mut state = self.state.write().await;
                    state.uploading = false;
                    state
                        .notifications
                        .push(Notification::error("Failed to upload SOPs"));
                    return;
                }
            },
            UploadMode::Bulk => {
                let count = files.len();
                self.repository
                    .create_bulk(files, brand, metadata)
                    .await
                    .map(|_| format!("{} SOPs uploaded successfully", count))
            }
            UploadMode::Global => self
                .repository
                .create_global(files, metadata)
                .await
                .map(|_| "SOPs uploaded to all brands successfully".to_string()),
        };

        match result {
            Ok(message) => {
                {
                    let mut state = self.state.write().await;
                    state.uploading = false;
                    state.upload_modal_open = false;
                    state.notifications.push(Notification::success(message));
                }
                self.reload().await;
            }
            Err(e) => {
                warn!("Upload failed: {}", e);
                let mut state = self.state.write().await;
                state.uploading = false;
                state
                    .notifications
                    .push(Notification::error("Failed to upload SOPs"));
            }
        }
    }

    /// Replace the content of the document the update dialog is showing
    pub async fn apply_update(&self, file: UploadedFile) {
        let target = {
            let mut state = self.state.write().await;
            if state.updating {
                debug!("Update already in flight, ignoring");
                return;
            }
            let Some(target) = state.selected_document.clone() else {
                return;
            };
            state.updating = true;
            target
        };

        match self.repository.update(target.id, file).await {
            Ok(_) => {
                {
                    let mut state = self.state.write().await;
                    state.updating = false;
                    state.update_modal_open = false;
                    state.selected_document = None;
                    state
                        .notifications
                        .push(Notification::success("SOP updated successfully"));
                }
                self.reload().await;
            }
            Err(e) => {
                warn!("Update failed for {}: {}", target.id, e);
                let mut state = self.state.write().await;
                state.updating = false;
                state
                    .notifications
                    .push(Notification::error("Failed to update SOP"));
            }
        }
    }

    /// Delete the document the confirmation dialog is showing
    pub async fn confirm_delete(&self) {
        let target = {
            let mut state = self.state.write().await;
            if state.deleting {
                debug!("Delete already in flight, ignoring");
                return;
            }
            let Some(target) = state.selected_document.clone() else {
                return;
            };
            state.deleting = true;
            target
        };

        match self.repository.delete(target.id).await {
            Ok(()) => {
                {
                    let mut state = self.state.write().await;
                    state.deleting = false;
                    state.delete_dialog_open = false;
                    state.selected_document = None;
                    state
                        .notifications
                        .push(Notification::success("SOP deleted successfully"));
                }
                self.reload().await;
            }
            Err(e) => {
                warn!("Delete failed for {}: {}", target.id, e);
                let mut state = self.state.write().await;
                state.deleting = false;
                state
                    .notifications
                    .push(Notification::error("Failed to delete SOP"));
            }
        }
    }
}

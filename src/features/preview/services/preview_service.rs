use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::documents::services::DocumentRepository;
use crate::features::preview::dtos::PreviewDescriptorDto;

/// Minimum zoom percentage the viewer supports
const MIN_ZOOM: u32 = 50;
/// Maximum zoom percentage the viewer supports
const MAX_ZOOM: u32 = 200;
/// Zoom moves in steps of this size
const ZOOM_STEP: u32 = 25;
const DEFAULT_ZOOM: u32 = 100;

/// Service for building preview descriptors
pub struct PreviewService {
    repository: Arc<dyn DocumentRepository>,
}

impl PreviewService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Build the viewer descriptor for a document
    pub async fn descriptor(
        &self,
        id: Uuid,
        page: Option<u32>,
        zoom: Option<u32>,
    ) -> Result<PreviewDescriptorDto> {
        let document = self.repository.get(id).await?;

        let page = page.unwrap_or(1).max(1);
        let zoom = snap_zoom(zoom.unwrap_or(DEFAULT_ZOOM));

        Ok(PreviewDescriptorDto {
            document_id: document.id,
            file_name: document.file_name,
            url: format!("{}#page={}&zoom={}", document.file_path, page, zoom),
            page,
            zoom,
        })
    }
}

/// Clamp a zoom percentage into range and snap it to the nearest step
fn snap_zoom(zoom: u32) -> u32 {
    let clamped = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    let snapped = ((clamped + ZOOM_STEP / 2) / ZOOM_STEP) * ZOOM_STEP;
    snapped.clamp(MIN_ZOOM, MAX_ZOOM)
}

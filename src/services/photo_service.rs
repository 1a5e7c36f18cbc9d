// src/services/photo_service.rs
// DOCUMENTATION: Business logic for the photo gallery
// PURPOSE: Validate uploads, delegate to the image store, maintain the registry

use crate::errors::GalleryError;
use crate::models::{MessageResponse, PhotoRecord};
use crate::services::image_store::{ImageStore, ImageStoreError, UploadRequest};
use crate::services::registry::PhotoRegistry;
use crate::services::transform::{self, SizePreset};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub const SERVICE_MESSAGE: &str = "Photo Gallery API with Cloudinary";

/// Filename recorded when the client did not send one
const DEFAULT_ORIGINAL_NAME: &str = "uploaded_image";

/// Outcome of the best-effort delete in the image store
/// DOCUMENTATION: Logged by PhotoService, never turned into an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteDeletion {
    Deleted,
    Failed(String),
}

pub struct PhotoService {
    store: Arc<dyn ImageStore>,
    registry: Arc<dyn PhotoRegistry>,
    /// Namespace prefix for storage keys
    folder: String,
    /// Upper bound for each image store call
    timeout: Duration,
}

impl PhotoService {
    pub fn new(
        store: Arc<dyn ImageStore>,
        registry: Arc<dyn PhotoRegistry>,
        folder: String,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            registry,
            folder,
            timeout,
        }
    }

    /// Static description of the service
    pub fn info(&self) -> MessageResponse {
        MessageResponse::new(SERVICE_MESSAGE)
    }

    /// Upload an image and record its metadata
    /// DOCUMENTATION: Nothing reaches the registry unless the store call succeeds
    pub async fn upload_photo(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        original_filename: Option<&str>,
    ) -> Result<PhotoRecord, GalleryError> {
        if !content_type.starts_with("image/") {
            log::warn!("Rejected upload with content type '{}'", content_type);
            return Err(GalleryError::InvalidInput("File must be an image".to_string()));
        }

        let original_name = original_filename
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ORIGINAL_NAME)
            .to_string();

        let request = UploadRequest {
            bytes,
            content_type: content_type.to_string(),
            filename: original_name.clone(),
            storage_key: format!("{}/{}", self.folder, Uuid::new_v4()),
            transformation: transform::incoming_transformation(),
            eager: transform::eager_transformations(),
        };
        let storage_key = request.storage_key.clone();

        let stored = tokio::time::timeout(self.timeout, self.store.upload(request))
            .await
            .map_err(|_| ImageStoreError::Timeout(self.timeout))
            .and_then(|result| result)
            .map_err(|e| {
                log::error!("Upload of {} failed: {}", storage_key, e);
                GalleryError::UploadFailed(e.to_string())
            })?;

        let record = PhotoRecord {
            id: Uuid::new_v4().to_string(),
            thumbnail_url: transform::derive_url(&stored.url, SizePreset::Thumbnail),
            grid_url: transform::derive_url(&stored.url, SizePreset::Grid),
            large_url: transform::derive_url(&stored.url, SizePreset::Large),
            storage_key: stored.storage_key,
            original_name,
            url: stored.url,
            uploaded_at: Utc::now(),
            size_bytes: stored.bytes,
            width_px: stored.width,
            height_px: stored.height,
            format: stored.format,
        };

        self.registry.append(record.clone()).await;

        log::info!(
            "Uploaded photo {} ({}, {} bytes, {}x{})",
            record.id,
            record.storage_key,
            record.size_bytes,
            record.width_px,
            record.height_px
        );

        Ok(record)
    }

    /// All photos in upload order
    pub async fn list_photos(&self) -> Vec<PhotoRecord> {
        self.registry.list().await
    }

    pub async fn get_photo(&self, id: &str) -> Result<PhotoRecord, GalleryError> {
        self.registry
            .get(id)
            .await
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))
    }

    /// Delete a photo locally, then best-effort in the image store
    /// DOCUMENTATION: Local removal happens first and is never rolled back.
    /// The remote destroy runs on its own task; callers may drop the handle
    /// to answer without waiting for the provider.
    pub async fn delete_photo(
        &self,
        id: &str,
    ) -> Result<JoinHandle<RemoteDeletion>, GalleryError> {
        let record = self
            .registry
            .remove(id)
            .await
            .ok_or_else(|| GalleryError::NotFound(id.to_string()))?;

        let store = Arc::clone(&self.store);
        let timeout = self.timeout;

        Ok(tokio::spawn(async move {
            let destroy = store.destroy(&record.storage_key);
            let remote = match tokio::time::timeout(timeout, destroy).await {
                Ok(Ok(())) => RemoteDeletion::Deleted,
                Ok(Err(e)) => RemoteDeletion::Failed(e.to_string()),
                Err(_) => RemoteDeletion::Failed(ImageStoreError::Timeout(timeout).to_string()),
            };

            match &remote {
                RemoteDeletion::Deleted => {
                    log::info!("Deleted photo {} ({})", record.id, record.storage_key)
                }
                RemoteDeletion::Failed(reason) => log::warn!(
                    "Deleted photo {} locally; image store delete of {} failed: {}",
                    record.id,
                    record.storage_key,
                    reason
                ),
            }

            remote
        }))
    }

    pub async fn photo_count(&self) -> usize {
        self.registry.len().await
    }
}

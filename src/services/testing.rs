// src/services/testing.rs
// DOCUMENTATION: In-process image store for unit tests

use crate::services::image_store::{ImageStore, ImageStoreError, StoredImage, UploadRequest};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct FakeImageStore {
    upload_error: Option<String>,
    destroy_error: Option<String>,
    delay: Option<Duration>,
    destroy_delay: Option<Duration>,
    uploads: Mutex<Vec<UploadRequest>>,
    destroyed: Mutex<Vec<String>>,
}

impl FakeImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_uploads(message: &str) -> Self {
        Self {
            upload_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_destroys(message: &str) -> Self {
        Self {
            destroy_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn with_destroy_delay(delay: Duration) -> Self {
        Self {
            destroy_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn last_upload(&self) -> Option<UploadRequest> {
        self.uploads.lock().unwrap().last().cloned()
    }

    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, ImageStoreError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.upload_error {
            return Err(ImageStoreError::Provider(message.clone()));
        }

        let stored = StoredImage {
            url: format!(
                "https://res.cloudinary.com/demo/image/upload/v1712345678/{}.jpg",
                request.storage_key
            ),
            storage_key: request.storage_key.clone(),
            bytes: request.bytes.len() as u64,
            width: 640,
            height: 480,
            format: "jpg".to_string(),
        };
        self.uploads.lock().unwrap().push(request);
        Ok(stored)
    }

    async fn destroy(&self, storage_key: &str) -> Result<(), ImageStoreError> {
        if let Some(delay) = self.destroy_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.destroy_error {
            return Err(ImageStoreError::Provider(message.clone()));
        }
        self.destroyed.lock().unwrap().push(storage_key.to_string());
        Ok(())
    }
}

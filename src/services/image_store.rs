// src/services/image_store.rs
// DOCUMENTATION: Abstraction over the external image hosting service
// PURPOSE: Let PhotoService upload and destroy images without knowing the provider

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by an image store call
#[derive(Error, Debug)]
pub enum ImageStoreError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Provider(String),

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Image store did not answer within {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for ImageStoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ImageStoreError::Decode(e.to_string())
        } else {
            ImageStoreError::Request(e.to_string())
        }
    }
}

/// Everything the store needs to persist one image
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    /// Key the image is stored under (provider `public_id`)
    pub storage_key: String,
    /// Chained directives applied to the primary asset
    pub transformation: String,
    /// Renditions computed eagerly, `|`-separated
    pub eager: String,
}

/// What the store reports back after a successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    /// Resolved storage key
    pub storage_key: String,
    /// Canonical HTTPS delivery URL
    pub url: String,
    pub bytes: u64,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// External image hosting service
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist an image and return its canonical URL and metadata
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, ImageStoreError>;

    /// Remove a stored image by key
    async fn destroy(&self, storage_key: &str) -> Result<(), ImageStoreError>;
}

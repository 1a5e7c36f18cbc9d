// src/services/cloudinary_client.rs
// DOCUMENTATION: Cloudinary upload API client
// PURPOSE: Handle signed upload and destroy calls against Cloudinary

use crate::config::Config;
use crate::services::image_store::{ImageStore, ImageStoreError, StoredImage, UploadRequest};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use std::time::Duration;

/// Cloudinary API client
/// DOCUMENTATION: Handles request signing and API calls to Cloudinary
pub struct CloudinaryClient {
    /// HTTP client for making requests
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    /// Base URL for the Cloudinary REST API
    base_url: String,
}

/// Response from the upload endpoint
/// DOCUMENTATION: Only the fields the gallery keeps
#[derive(Debug, Deserialize)]
pub struct CloudinaryUploadResponse {
    pub public_id: String,
    pub secure_url: String,
    pub bytes: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

/// Response from the destroy endpoint
#[derive(Debug, Deserialize)]
pub struct CloudinaryDestroyResponse {
    /// "ok" or "not found"
    pub result: String,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    error: CloudinaryErrorMessage,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorMessage {
    message: String,
}

impl CloudinaryClient {
    /// Create new Cloudinary client
    /// DOCUMENTATION: Every request is bounded by `timeout`
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
        timeout: Duration,
    ) -> Result<Self, ImageStoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            cloud_name,
            api_key,
            api_secret,
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ImageStoreError> {
        Self::new(
            config.cloudinary_cloud_name.clone(),
            config.cloudinary_api_key.clone(),
            config.cloudinary_api_secret.clone(),
            config.upload_timeout(),
        )
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}/image/{}", self.base_url, self.cloud_name, action)
    }

    /// Sign request parameters
    /// DOCUMENTATION: Parameters sorted by name, joined as `k=v` with `&`,
    /// secret appended, SHA-1, lowercase hex
    pub fn sign(&self, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> =
            params.iter().filter(|(_, v)| !v.is_empty()).collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha1::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Turn a non-success response into an error
    /// DOCUMENTATION: Prefers Cloudinary's `{"error": {"message"}}` body when present
    async fn error_from_response(response: reqwest::Response) -> ImageStoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Self::error_from_body(status, body)
    }

    /// Map a failed response's status and body to an error
    fn error_from_body(status: u16, body: String) -> ImageStoreError {
        match serde_json::from_str::<CloudinaryErrorBody>(&body) {
            Ok(parsed) => ImageStoreError::Provider(parsed.error.message),
            Err(_) => ImageStoreError::Status { status, body },
        }
    }

    /// Only `"ok"` counts as a completed destroy
    fn destroy_outcome(
        storage_key: &str,
        response: &CloudinaryDestroyResponse,
    ) -> Result<(), ImageStoreError> {
        match response.result.as_str() {
            "ok" => Ok(()),
            other => Err(ImageStoreError::Provider(format!(
                "Destroy of {} returned '{}'",
                storage_key, other
            ))),
        }
    }
}

#[async_trait]
impl ImageStore for CloudinaryClient {
    async fn upload(&self, request: UploadRequest) -> Result<StoredImage, ImageStoreError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let signed = [
            ("eager", request.eager.clone()),
            ("public_id", request.storage_key.clone()),
            ("timestamp", timestamp.clone()),
            ("transformation", request.transformation.clone()),
        ];
        let signature = self.sign(&signed);

        let file = Part::bytes(request.bytes)
            .file_name(request.filename)
            .mime_str(&request.content_type)?;

        let mut form = Form::new()
            .part("file", file)
            .text("api_key", self.api_key.clone())
            .text("signature", signature);
        for (key, value) in signed {
            form = form.text(key, value);
        }

        log::debug!(
            "Cloudinary upload: public_id={}, eager={}",
            request.storage_key,
            request.eager
        );

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                log::error!("Cloudinary upload request failed: {}", e);
                ImageStoreError::from(e)
            })?;

        if !response.status().is_success() {
            let err = Self::error_from_response(response).await;
            log::error!("Cloudinary upload rejected: {}", err);
            return Err(err);
        }

        let parsed: CloudinaryUploadResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Cloudinary upload response: {}", e);
            ImageStoreError::Decode(e.to_string())
        })?;

        Ok(StoredImage {
            storage_key: parsed.public_id,
            url: parsed.secure_url,
            bytes: parsed.bytes.unwrap_or(0),
            width: parsed.width.unwrap_or(0),
            height: parsed.height.unwrap_or(0),
            format: parsed.format.unwrap_or_default(),
        })
    }

    async fn destroy(&self, storage_key: &str) -> Result<(), ImageStoreError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let signed = [
            ("public_id", storage_key.to_string()),
            ("timestamp", timestamp),
        ];
        let signature = self.sign(&signed);

        let mut params: Vec<(&str, String)> = signed.to_vec();
        params.push(("api_key", self.api_key.clone()));
        params.push(("signature", signature));

        log::debug!("Cloudinary destroy: public_id={}", storage_key);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let parsed: CloudinaryDestroyResponse = response
            .json()
            .await
            .map_err(|e| ImageStoreError::Decode(e.to_string()))?;

        Self::destroy_outcome(storage_key, &parsed)
    }
}

// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a gallery request can end in
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Photo not found with id: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("Failed to upload file: {0}")]
    UploadFailed(String),
}

impl GalleryError {
    fn error_code(&self) -> &'static str {
        match self {
            GalleryError::NotFound(_) => "NOT_FOUND",
            GalleryError::InvalidInput(_) => "INVALID_INPUT",
            GalleryError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            GalleryError::UploadFailed(_) => "UPLOAD_FAILED",
        }
    }
}

/// Convert GalleryError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::NotFound(_) => StatusCode::NOT_FOUND,
            GalleryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GalleryError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GalleryError::UploadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

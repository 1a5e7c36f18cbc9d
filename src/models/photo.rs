// src/models/photo.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one uploaded photo
/// DOCUMENTATION: Created once after the image store accepts the upload,
/// never mutated afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    /// Gallery identifier, independent of the storage key
    pub id: String,
    /// Image store public id, used for deletion
    pub storage_key: String,
    /// Client-supplied filename (untrusted)
    pub original_name: String,
    /// Canonical delivery URL
    pub url: String,
    pub thumbnail_url: String,
    pub grid_url: String,
    pub large_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub size_bytes: u64,
    pub width_px: u32,
    pub height_px: u32,
    pub format: String,
}

/// Response body for GET /api/photos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoListResponse {
    pub photos: Vec<PhotoRecord>,
}

/// Plain `{ "message": ... }` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_names() {
        let record = PhotoRecord {
            id: "abc".to_string(),
            storage_key: "vsco_photos/1".to_string(),
            original_name: "sunset.jpg".to_string(),
            url: "https://res.cloudinary.com/demo/image/upload/v1/vsco_photos/1.jpg".to_string(),
            thumbnail_url: "t".to_string(),
            grid_url: "g".to_string(),
            large_url: "l".to_string(),
            uploaded_at: Utc::now(),
            size_bytes: 2048,
            width_px: 640,
            height_px: 480,
            format: "jpg".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["storageKey"], "vsco_photos/1");
        assert_eq!(value["originalName"], "sunset.jpg");
        assert_eq!(value["thumbnailUrl"], "t");
        assert_eq!(value["sizeBytes"], 2048);
        assert_eq!(value["widthPx"], 640);
        assert_eq!(value["heightPx"], 480);
        assert!(value.get("uploadedAt").is_some());
        assert!(value.get("storage_key").is_none());
    }
}

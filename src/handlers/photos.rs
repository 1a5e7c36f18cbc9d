// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo operations
// PURPOSE: Parse requests, call PhotoService, return responses

use crate::config::Config;
use crate::errors::GalleryError;
use crate::models::{MessageResponse, PhotoListResponse};
use crate::services::PhotoService;
use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;

/// Multipart field carrying the image
const FILE_FIELD: &str = "file";

/// File part extracted from a multipart body
struct FileUpload {
    bytes: Vec<u8>,
    content_type: String,
    filename: Option<String>,
}

/// POST /api/upload
/// Upload a photo and return its metadata
pub async fn upload_photo(
    service: web::Data<PhotoService>,
    config: web::Data<Config>,
    mut payload: Multipart,
) -> Result<impl Responder, GalleryError> {
    let upload = read_file_field(&mut payload, config.max_upload_bytes).await?;

    let record = service
        .upload_photo(upload.bytes, &upload.content_type, upload.filename.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// GET /api/photos
/// List all photos in upload order
pub async fn list_photos(service: web::Data<PhotoService>) -> impl Responder {
    let photos = service.list_photos().await;
    HttpResponse::Ok().json(PhotoListResponse { photos })
}

/// GET /api/photos/{id}
pub async fn get_photo(
    service: web::Data<PhotoService>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    let photo = service.get_photo(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// DELETE /api/photos/{id}
/// Delete a photo; the image store delete is best-effort
pub async fn delete_photo(
    service: web::Data<PhotoService>,
    path: web::Path<String>,
) -> Result<impl Responder, GalleryError> {
    // Remote destroy keeps running after the response is sent
    let _remote = service.delete_photo(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Photo deleted successfully")))
}

/// Pull the `file` field out of a multipart body
/// DOCUMENTATION: Other fields are drained and ignored. `limit` caps the
/// bytes read across all fields, checked before anything reaches the image store.
async fn read_file_field(payload: &mut Multipart, limit: usize) -> Result<FileUpload, GalleryError> {
    let mut total = 0;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            GalleryError::InvalidInput(format!("Malformed multipart body: {}", e))
        })?;

        if field.name() != Some(FILE_FIELD) {
            read_field_bytes(&mut field, limit, &mut total).await?;
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_default();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let bytes = read_field_bytes(&mut field, limit, &mut total).await?;

        return Ok(FileUpload {
            bytes,
            content_type,
            filename,
        });
    }

    Err(GalleryError::InvalidInput("No file uploaded".to_string()))
}

async fn read_field_bytes(
    field: &mut Field,
    limit: usize,
    total: &mut usize,
) -> Result<Vec<u8>, GalleryError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| {
            log::warn!("Error reading upload field: {}", e);
            GalleryError::InvalidInput(format!("Malformed multipart body: {}", e))
        })?;

        *total += chunk.len();
        if *total > limit {
            return Err(GalleryError::PayloadTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/upload", web::post().to(upload_photo))
            .route("/upload", web::get().to(super::info::service_info))
            .route("/photos", web::get().to(list_photos))
            .route("/photos/{id}", web::get().to(get_photo))
            .route("/photos/{id}", web::delete().to(delete_photo)),
    );
}

// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(service: web::Data<PhotoService>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "photo-gallery",
        "version": env!("CARGO_PKG_VERSION"),
        "photos": service.photo_count().await
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

// src/handlers/info.rs
// DOCUMENTATION: Service description handler
// PURPOSE: Identify the API to clients and status checks

use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};

/// GET /
pub async fn service_info(service: web::Data<PhotoService>) -> impl Responder {
    HttpResponse::Ok().json(service.info())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info));
}

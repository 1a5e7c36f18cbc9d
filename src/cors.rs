// src/cors.rs
// DOCUMENTATION: CORS middleware for the public gallery API
// PURPOSE: Any origin, any method, any header; no credentials

use actix_cors::Cors;

/// Preflight cache lifetime in seconds
const PREFLIGHT_MAX_AGE: usize = 3600;

pub fn build_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn test_simple_request_gets_allow_origin() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors())
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://gallery.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_preflight_for_delete_is_allowed() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors())
                .route("/api/photos/{id}", web::delete().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/photos/abc")
            .insert_header((header::ORIGIN, "https://gallery.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}

// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, image store client, registry, and start HTTP server

mod config;
mod cors;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{CloudinaryClient, InMemoryPhotoRegistry, PhotoService};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting photo-gallery service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize image store client
    let store = match CloudinaryClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build image store client: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Image store: cloud '{}', folder '{}', timeout {}s",
        config.cloudinary_cloud_name,
        config.upload_folder,
        config.upload_timeout_secs
    );

    // 5. Photo service over an empty in-memory registry
    let service = web::Data::new(PhotoService::new(
        Arc::new(store),
        Arc::new(InMemoryPhotoRegistry::new()),
        config.upload_folder.clone(),
        config.upload_timeout(),
    ));

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (photo service and config)
            .app_data(service.clone())
            .app_data(config_data.clone())
            // Middleware
            .wrap(cors::build_cors())
            .wrap(Logger::default())
            // Routes
            .configure(handlers::info_config)
            .configure(handlers::health_config)
            .configure(handlers::photos_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}

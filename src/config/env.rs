// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::time::Duration;

const PLACEHOLDER_CLOUD_NAME: &str = "your_cloud_name";
const PLACEHOLDER_API_KEY: &str = "your_api_key";
const PLACEHOLDER_API_SECRET: &str = "your_api_secret";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Cloudinary account name
    pub cloudinary_cloud_name: String,

    /// Cloudinary access key
    pub cloudinary_api_key: String,

    /// Cloudinary access secret (signs every request)
    pub cloudinary_api_secret: String,

    /// Folder prefix for storage keys
    pub upload_folder: String,

    /// Upper bound for a single image store call, in seconds
    pub upload_timeout_secs: u64,

    /// Largest accepted upload body
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            cloudinary_cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                .unwrap_or_else(|_| PLACEHOLDER_CLOUD_NAME.to_string()),

            cloudinary_api_key: env::var("CLOUDINARY_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),

            cloudinary_api_secret: env::var("CLOUDINARY_API_SECRET")
                .unwrap_or_else(|_| PLACEHOLDER_API_SECRET.to_string()),

            upload_folder: env::var("UPLOAD_FOLDER").unwrap_or_else(|_| "vsco_photos".to_string()),

            upload_timeout_secs: env::var("UPLOAD_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "20971520".to_string())
                .parse()
                .unwrap_or(20 * 1024 * 1024),
        }
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Whether any Cloudinary credential is still the placeholder default
    pub fn uses_placeholder_credentials(&self) -> bool {
        self.cloudinary_cloud_name == PLACEHOLDER_CLOUD_NAME
            || self.cloudinary_api_key == PLACEHOLDER_API_KEY
            || self.cloudinary_api_secret == PLACEHOLDER_API_SECRET
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.upload_timeout_secs == 0 {
            return Err("UPLOAD_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("MAX_UPLOAD_BYTES must be greater than zero".to_string());
        }

        if self.uses_placeholder_credentials() {
            log::warn!("Cloudinary credentials not configured - uploads will fail");
        }

        Ok(())
    }
}

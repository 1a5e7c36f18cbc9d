// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cloudinary_client;
pub mod image_store;
pub mod photo_service;
pub mod registry;
pub mod transform;

#[cfg(test)]
pub mod testing;

pub use cloudinary_client::*;
pub use photo_service::*;
pub use registry::*;

//! Presigned S3 URL issuer for image uploads and downloads

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Lambda handlers
pub mod handlers;

/// S3 presigning
pub mod media_storage;

/// Gateway event routing
pub mod request;

/// Configuration, errors and response envelopes
pub mod types;

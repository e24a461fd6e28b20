//! Storage module for file retrieval
//!
//! Resolves storage keys of uploaded files and thumbnails into
//! download URLs against a MinIO/S3-compatible bucket.

mod storage_urls;

pub use storage_urls::StorageUrls;

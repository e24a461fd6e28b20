//! Uploaded file metadata.
//!
//! Read-only: records are written by the upload pipeline and thumbnail
//! workers, this feature only serves them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/files/{id}` | File metadata with resolved download URLs |
//! | GET | `/api/files?resourceType=&resourceId=` | Files attached to a resource |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::{AppFileRepository, FileService, PgAppFileRepository};

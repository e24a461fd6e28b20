use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::files::handlers::{get_file, list_files};
use crate::features::files::services::FileService;

/// Create routes for the files feature
pub fn routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route("/api/files", get(list_files))
        .route("/api/files/{id}", get(get_file))
        .with_state(file_service)
}

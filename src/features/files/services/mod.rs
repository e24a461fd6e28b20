mod file_repository;
mod file_service;

pub use file_repository::{AppFileRepository, PgAppFileRepository};
pub use file_service::FileService;

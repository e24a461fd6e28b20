mod app_file;

pub use app_file::{AppFileRecord, ResourceRef, StoredThumb};

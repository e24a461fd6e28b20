//! Users referenced by uploaded files.
//!
//! Only the lookup needed to resolve `AppFile.uploadedBy` lives here;
//! accounts themselves are owned by the identity provider.

pub mod dtos;
pub mod models;
pub mod services;

pub use services::{PgUserRepository, UserRepository};

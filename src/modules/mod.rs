//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for external services the resolvers depend on.

pub mod storage;

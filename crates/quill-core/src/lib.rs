//! Quill Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation shared across all Quill components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, StorageBackend};
pub use error::{AppError, ErrorMetadata, LogLevel};

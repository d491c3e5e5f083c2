//! Quill API Library
//!
//! This crate provides the HTTP API handlers, admin auth, application setup,
//! and the services owning the attachment lifecycle and dashboard statistics.

mod api_doc;
mod handlers;
mod telemetry;
mod utils;

// Public modules
pub mod auth;
pub mod error;
pub mod services;
pub mod setup;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use services::{DashboardService, PostService};

//! Quill DB Library
//!
//! Post persistence: the [`PostStore`] trait describes the document-store
//! primitives the rest of the system consumes, and [`PgPostStore`] implements
//! them over Postgres.

pub mod postgres;
pub mod store;

pub use postgres::PgPostStore;
pub use store::PostStore;

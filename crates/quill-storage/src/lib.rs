//! Quill Storage Library
//!
//! External object storage for post attachments, behind the
//! [`ObjectStorage`] trait. Objects are addressed by a `public_id` of the
//! form `{folder}/{uuid}`; the folder groups all objects belonging to one
//! logical collection (blog photos live under `blogs/`).
//!
//! `public_id`s must not contain `..` or a leading `/`.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use quill_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult, StoredObject};

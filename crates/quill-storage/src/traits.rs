//! Storage abstraction trait
//!
//! This module defines the ObjectStorage trait that all storage backends
//! must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object id: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An uploaded object: its storage identifier and public retrieval URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub public_id: String,
    pub url: String,
}

/// External object storage abstraction
///
/// All storage backends (S3-compatible, local filesystem) must implement
/// this trait. The post service works with any backend without coupling to
/// implementation details.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload raw bytes under a logical folder, returning the generated
    /// `public_id` and public URL.
    async fn upload(
        &self,
        folder: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredObject>;

    /// Delete a single object by its `public_id`.
    async fn delete(&self, public_id: &str) -> StorageResult<()>;

    /// Delete a batch of objects, best-effort.
    ///
    /// Individual failures are logged and swallowed, never propagated;
    /// sibling deletions run concurrently with no ordering between them.
    async fn delete_many(&self, public_ids: &[String]) {
        let results =
            futures::future::join_all(public_ids.iter().map(|id| self.delete(id))).await;
        for (public_id, result) in public_ids.iter().zip(results) {
            if let Err(error) = result {
                tracing::warn!(
                    error = %error,
                    public_id = %public_id,
                    "Failed to delete object from storage"
                );
            }
        }
    }

    /// The backend type, for logging and health reporting.
    fn backend_type(&self) -> quill_core::StorageBackend;
}

/// Reject ids that could escape the backend's namespace.
pub(crate) fn validate_public_id(public_id: &str) -> StorageResult<()> {
    if public_id.is_empty() || public_id.contains("..") || public_id.starts_with('/') {
        return Err(StorageError::InvalidId(public_id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_public_id() {
        assert!(validate_public_id("blogs/abc").is_ok());
        assert!(validate_public_id("").is_err());
        assert!(validate_public_id("../etc/passwd").is_err());
        assert!(validate_public_id("/blogs/abc").is_err());
    }
}

use crate::traits::{validate_public_id, ObjectStorage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Local filesystem storage implementation, intended for development and tests.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for object storage (e.g., "/var/lib/quill/media")
    /// * `base_url` - Base URL for serving objects (e.g., "http://localhost:3000/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert a public id to a filesystem path. The id has already been
    /// checked against traversal sequences by `validate_public_id`.
    fn id_to_path(&self, public_id: &str) -> PathBuf {
        self.base_path.join(public_id)
    }

    fn generate_id(folder: &str) -> String {
        format!("{}/{}", folder.trim_matches('/'), Uuid::new_v4())
    }

    fn generate_url(&self, public_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), public_id)
    }

    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(
        &self,
        folder: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredObject> {
        let public_id = Self::generate_id(folder);
        validate_public_id(&public_id)?;
        let path = self.id_to_path(&public_id);

        self.ensure_parent_dir(&path).await?;

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        file.write_all(&data)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        tracing::debug!(
            public_id = %public_id,
            size_bytes = data.len(),
            "Local upload successful"
        );

        Ok(StoredObject {
            url: self.generate_url(&public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> StorageResult<()> {
        validate_public_id(public_id)?;
        let path = self.id_to_path(public_id);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(public_id.to_string()))
            }
            Err(e) => Err(StorageError::DeleteFailed(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "http://localhost:3000/media".to_string())
            .await
            .unwrap();
        (dir, storage)
    }

    #[tokio::test]
    async fn test_upload_writes_file_and_builds_url() {
        let (_dir, storage) = test_storage().await;
        let object = storage
            .upload("blogs", "image/png", b"png bytes".to_vec())
            .await
            .unwrap();

        assert!(object.public_id.starts_with("blogs/"));
        assert_eq!(
            object.url,
            format!("http://localhost:3000/media/{}", object.public_id)
        );

        let on_disk = fs::read(storage.id_to_path(&object.public_id))
            .await
            .unwrap();
        assert_eq!(on_disk, b"png bytes");
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let (_dir, storage) = test_storage().await;
        let object = storage
            .upload("blogs", "image/png", vec![1, 2, 3])
            .await
            .unwrap();

        storage.delete(&object.public_id).await.unwrap();
        assert!(!storage.id_to_path(&object.public_id).exists());
    }

    #[tokio::test]
    async fn test_delete_missing_object_is_not_found() {
        let (_dir, storage) = test_storage().await;
        let err = storage.delete("blogs/missing").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_rejects_traversal() {
        let (_dir, storage) = test_storage().await;
        let err = storage.delete("../outside").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_delete_many_is_best_effort() {
        let (_dir, storage) = test_storage().await;
        let object = storage
            .upload("blogs", "image/png", vec![1])
            .await
            .unwrap();

        // One existing, one missing: the batch must still remove the existing one.
        storage
            .delete_many(&[object.public_id.clone(), "blogs/missing".to_string()])
            .await;
        assert!(!storage.id_to_path(&object.public_id).exists());
    }
}

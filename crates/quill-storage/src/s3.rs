use crate::traits::{validate_public_id, ObjectStorage, StorageError, StorageResult, StoredObject};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStore, PutPayload};
use uuid::Uuid;

/// S3 storage implementation
#[derive(Debug)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        // Build from environment (credentials) plus explicit settings.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// Generate an object id under the given folder.
    fn generate_id(folder: &str) -> String {
        format!("{}/{}", folder.trim_matches('/'), Uuid::new_v4())
    }

    /// Generate public URL for an object
    ///
    /// For AWS S3, uses the standard format: https://{bucket}.s3.{region}.amazonaws.com/{key}
    /// For S3-compatible providers, uses path-style with the endpoint URL
    fn generate_url(&self, public_id: &str) -> String {
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, public_id)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, public_id
            )
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        folder: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<StoredObject> {
        let public_id = Self::generate_id(folder);
        validate_public_id(&public_id)?;
        let size = data.len() as u64;
        let bytes = Bytes::from(data);
        let location = Path::from(public_id.clone());

        let start = std::time::Instant::now();

        self.store
            .put(&location, PutPayload::from(bytes))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    public_id = %public_id,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 upload failed"
                );
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.generate_url(&public_id);

        tracing::info!(
            bucket = %self.bucket,
            public_id = %public_id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(StoredObject { public_id, url })
    }

    async fn delete(&self, public_id: &str) -> StorageResult<()> {
        validate_public_id(public_id)?;
        let location = Path::from(public_id.to_string());

        match self.store.delete(&location).await {
            Ok(()) => {
                tracing::debug!(
                    bucket = %self.bucket,
                    public_id = %public_id,
                    "S3 delete successful"
                );
                Ok(())
            }
            Err(ObjectStoreError::NotFound { .. }) => {
                Err(StorageError::NotFound(public_id.to_string()))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    public_id = %public_id,
                    "S3 delete failed"
                );
                Err(StorageError::DeleteFailed(e.to_string()))
            }
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_folder_scoped() {
        let id = S3Storage::generate_id("blogs");
        assert!(id.starts_with("blogs/"));
        // uuid suffix
        assert!(Uuid::parse_str(id.strip_prefix("blogs/").unwrap()).is_ok());
    }

    #[test]
    fn test_generate_url_aws_format() {
        let storage = S3Storage::new(
            "quill-media".to_string(),
            "eu-west-1".to_string(),
            None,
        )
        .unwrap();
        assert_eq!(
            storage.generate_url("blogs/abc"),
            "https://quill-media.s3.eu-west-1.amazonaws.com/blogs/abc"
        );
    }

    #[test]
    fn test_generate_url_custom_endpoint_uses_path_style() {
        let storage = S3Storage::new(
            "quill-media".to_string(),
            "us-east-1".to_string(),
            Some("http://localhost:9000/".to_string()),
        )
        .unwrap();
        assert_eq!(
            storage.generate_url("blogs/abc"),
            "http://localhost:9000/quill-media/blogs/abc"
        );
    }
}

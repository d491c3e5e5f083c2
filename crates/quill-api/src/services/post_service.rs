//! Post CRUD with attachment lifecycle.
//!
//! The service owns the coupling between the post store and external object
//! storage: uploads on create, delete-then-replace on update, cleanup on
//! delete. There is no transaction spanning both stores; the ordering rules
//! below bound the orphan window (see DESIGN.md for the trade-off record).

use futures::future::try_join_all;
use quill_core::models::{Attachment, NewPost, Post, PostPatch};
use quill_core::{validation, AppError};
use quill_db::PostStore;
use quill_storage::ObjectStorage;
use std::sync::Arc;
use uuid::Uuid;

/// Logical folder all blog photos are uploaded under.
pub const ATTACHMENT_FOLDER: &str = "blogs";

/// A raw file received from a multipart request.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Fields of an update request. `files` empty means "keep existing photos".
#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub files: Vec<RawUpload>,
}

/// Post persistence plus attachment lifecycle.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
    storage: Arc<dyn ObjectStorage>,
    max_photos: usize,
}

impl PostService {
    pub fn new(
        store: Arc<dyn PostStore>,
        storage: Arc<dyn ObjectStorage>,
        max_photos: usize,
    ) -> Self {
        Self {
            store,
            storage,
            max_photos,
        }
    }

    /// Create a post, uploading its attachments first.
    ///
    /// Uploads within the batch run concurrently; the resulting `photos`
    /// order matches the input file order. A single failed upload aborts the
    /// create; already-uploaded siblings are not rolled back.
    #[tracing::instrument(skip(self, files), fields(operation = "create_post", file_count = files.len()))]
    pub async fn create(
        &self,
        title: String,
        content: String,
        files: Vec<RawUpload>,
    ) -> Result<Post, AppError> {
        validation::validate_new_post(&title, &content)?;
        validation::validate_photo_batch(files.len(), self.max_photos)?;

        let photos = self.upload_batch(files).await?;

        self.store
            .insert(NewPost {
                title,
                content,
                photos,
            })
            .await
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> Result<Vec<Post>, AppError> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Post, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    /// Update a post; a non-empty file batch replaces the attachment set
    /// wholesale.
    ///
    /// Old attachments are deleted (best-effort, batch completes first)
    /// before any new upload begins, so external storage never holds both
    /// sets at once.
    #[tracing::instrument(skip(self, update), fields(operation = "update_post", post_id = %id))]
    pub async fn update(&self, id: Uuid, update: UpdatePost) -> Result<Post, AppError> {
        let existing = self.get_by_id(id).await?;

        validation::validate_photo_batch(update.files.len(), self.max_photos)?;

        let photos = if update.files.is_empty() {
            None
        } else {
            let old_ids = public_ids(&existing.photos);
            if !old_ids.is_empty() {
                self.storage.delete_many(&old_ids).await;
            }
            Some(self.upload_batch(update.files).await?)
        };

        let patch = PostPatch {
            title: update.title,
            content: update.content,
            photos,
        };

        self.store
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))
    }

    /// Delete a post and all of its attachments from external storage.
    ///
    /// A nonexistent id fails with NotFound before any storage call is made.
    #[tracing::instrument(skip(self), fields(operation = "delete_post", post_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;

        let ids = public_ids(&existing.photos);
        if !ids.is_empty() {
            self.storage.delete_many(&ids).await;
        }

        self.store.delete(id).await?;
        Ok(())
    }

    /// Upload a file batch, preserving input order in the result.
    async fn upload_batch(&self, files: Vec<RawUpload>) -> Result<Vec<Attachment>, AppError> {
        let uploads = files.into_iter().map(|file| {
            let storage = Arc::clone(&self.storage);
            async move {
                storage
                    .upload(ATTACHMENT_FOLDER, &file.content_type, file.data)
                    .await
            }
        });

        let objects = try_join_all(uploads)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(objects
            .into_iter()
            .map(|object| Attachment {
                public_id: object.public_id,
                url: object.url,
            })
            .collect())
    }
}

/// Collect non-empty storage ids from an attachment set.
fn public_ids(photos: &[Attachment]) -> Vec<String> {
    photos
        .iter()
        .map(|photo| photo.public_id.clone())
        .filter(|id| !id.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_ids_skips_empty() {
        let photos = vec![
            Attachment {
                public_id: "blogs/a".to_string(),
                url: "u1".to_string(),
            },
            Attachment {
                public_id: String::new(),
                url: "u2".to_string(),
            },
            Attachment {
                public_id: "blogs/b".to_string(),
                url: "u3".to_string(),
            },
        ];
        assert_eq!(public_ids(&photos), vec!["blogs/a", "blogs/b"]);
    }
}

//! In-memory test doubles for the post store and object storage.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use quill_core::models::{Attachment, NewPost, Post, PostPatch, PostTimestamps, RecentPost};
use quill_core::{AppError, StorageBackend};
use quill_db::PostStore;
use quill_storage::{ObjectStorage, StorageError, StorageResult, StoredObject};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory post store with the same ordering and timestamp semantics as
/// the Postgres implementation.
#[derive(Default)]
pub struct MockPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MockPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a post with explicit timestamps, bypassing the insert path.
    pub fn seed(&self, title: &str, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Uuid {
        self.seed_with_photos(title, created_at, updated_at, vec![])
    }

    pub fn seed_with_photos(
        &self,
        title: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        photos: Vec<Attachment>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.posts.lock().unwrap().push(Post {
            id,
            title: title.to_string(),
            content: "content".to_string(),
            photos,
            created_at,
            updated_at,
        });
        id
    }
}

#[async_trait]
impl PostStore for MockPostStore {
    async fn insert(&self, new_post: NewPost) -> Result<Post, AppError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            photos: new_post.photos,
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, AppError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(photos) = patch.photos {
            post.photos = photos;
        }
        // Keep updated_at strictly after created_at even on fast clocks.
        post.updated_at = Utc::now().max(post.created_at + Duration::milliseconds(1));
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.posts.lock().unwrap().len() as i64)
    }

    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, AppError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.created_at >= start && p.created_at <= end)
            .map(|p| p.created_at)
            .collect())
    }

    async fn recent_by_created(&self, limit: i64) -> Result<Vec<RecentPost>, AppError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts
            .into_iter()
            .take(limit as usize)
            .map(|p| RecentPost {
                title: p.title,
                created_at: p.created_at,
            })
            .collect())
    }

    async fn recent_by_updated(&self, limit: i64) -> Result<Vec<PostTimestamps>, AppError> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(posts
            .into_iter()
            .take(limit as usize)
            .map(|p| PostTimestamps {
                title: p.title,
                created_at: p.created_at,
                updated_at: p.updated_at,
            })
            .collect())
    }
}

/// Object storage double that records uploads and deletes and can be told to
/// fail uploads.
#[derive(Default)]
pub struct MockObjectStorage {
    pub uploads: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    fail_uploads: AtomicBool,
    counter: AtomicUsize,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_uploads(&self) {
        self.fail_uploads.store(true, Ordering::SeqCst);
    }

    pub fn uploaded_ids(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn upload(
        &self,
        folder: &str,
        _content_type: &str,
        _data: Vec<u8>,
    ) -> StorageResult<StoredObject> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let public_id = format!("{}/mock-{}", folder, n);
        self.uploads.lock().unwrap().push(public_id.clone());
        Ok(StoredObject {
            url: format!("https://storage.test/{}", public_id),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> StorageResult<()> {
        self.deletes.lock().unwrap().push(public_id.to_string());
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

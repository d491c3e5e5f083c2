//! Post store contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_core::models::{NewPost, Post, PostPatch, PostTimestamps, RecentPost};
use quill_core::AppError;
use uuid::Uuid;

/// Document-store primitives over the post collection.
///
/// Timestamps are store-managed: `insert` sets `created_at == updated_at`
/// exactly, `update` bumps `updated_at` and never touches `created_at`.
/// Implementations must be usable behind `Arc<dyn PostStore>`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post and return it with its generated id.
    async fn insert(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Fetch one post by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, AppError>;

    /// All posts, newest first (`created_at` descending). No pagination.
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;

    /// Apply a partial update; `None` fields stay unchanged. Returns the
    /// updated post, or `None` when the id does not exist.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, AppError>;

    /// Remove a post record. Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Total number of posts.
    async fn count(&self) -> Result<i64, AppError>;

    /// Creation timestamps of posts with `created_at` in `[start, end]`.
    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, AppError>;

    /// The `limit` posts with greatest `created_at`, projected to
    /// `{title, created_at}`.
    async fn recent_by_created(&self, limit: i64) -> Result<Vec<RecentPost>, AppError>;

    /// The `limit` posts with greatest `updated_at`, projected to
    /// `{title, created_at, updated_at}`.
    async fn recent_by_updated(&self, limit: i64) -> Result<Vec<PostTimestamps>, AppError>;
}

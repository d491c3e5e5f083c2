//! Postgres implementation of [`PostStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quill_core::models::{Attachment, NewPost, Post, PostPatch, PostTimestamps, RecentPost};
use quill_core::AppError;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::store::PostStore;

/// Raw database row; `photos` is stored as JSONB.
#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    photos: Json<Vec<Attachment>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            photos: row.photos.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RecentPostRow {
    title: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct TimestampsRow {
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Postgres-backed post store
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    #[tracing::instrument(skip(self, new_post), fields(db.table = "posts", db.operation = "insert"))]
    async fn insert(&self, new_post: NewPost) -> Result<Post, AppError> {
        // Both timestamps are bound to the same instant so that
        // created_at == updated_at holds exactly for fresh posts.
        let now = Utc::now();

        let row: PostRow = sqlx::query_as::<Postgres, PostRow>(
            r#"
            INSERT INTO posts (title, content, photos, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING *
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(Json(&new_post.photos))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, AppError> {
        let row: Option<PostRow> =
            sqlx::query_as::<Postgres, PostRow>("SELECT * FROM posts WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let rows: Vec<PostRow> = sqlx::query_as::<Postgres, PostRow>(
            "SELECT * FROM posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, patch), fields(db.table = "posts", db.operation = "update"))]
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, AppError> {
        let now = Utc::now();

        let row: Option<PostRow> = sqlx::query_as::<Postgres, PostRow>(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                photos = COALESCE($4, photos),
                updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.photos.map(Json))
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "delete"))]
    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "count"))]
    async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, AppError> {
        let rows: Vec<(DateTime<Utc>,)> = sqlx::query_as(
            "SELECT created_at FROM posts WHERE created_at >= $1 AND created_at <= $2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(ts,)| ts).collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn recent_by_created(&self, limit: i64) -> Result<Vec<RecentPost>, AppError> {
        let rows: Vec<RecentPostRow> = sqlx::query_as::<Postgres, RecentPostRow>(
            "SELECT title, created_at FROM posts ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| RecentPost {
                title: row.title,
                created_at: row.created_at,
            })
            .collect())
    }

    #[tracing::instrument(skip(self), fields(db.table = "posts", db.operation = "select"))]
    async fn recent_by_updated(&self, limit: i64) -> Result<Vec<PostTimestamps>, AppError> {
        let rows: Vec<TimestampsRow> = sqlx::query_as::<Postgres, TimestampsRow>(
            "SELECT title, created_at, updated_at FROM posts ORDER BY updated_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PostTimestamps {
                title: row.title,
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
            .collect())
    }
}

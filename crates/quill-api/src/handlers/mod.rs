//! HTTP handlers, one file per endpoint group.
//!
//! All success payloads follow the `{success: true, ...}` convention; errors
//! render through [`crate::error::HttpAppError`].

pub mod admin;
pub mod dashboard;
pub mod post_create;
pub mod post_delete;
pub mod post_get;
pub mod post_list;
pub mod post_update;

use quill_core::models::Post;
use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgment payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Payload carrying a single post.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub blog: Post,
}

/// Payload carrying the full post listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub success: bool,
    pub blogs: Vec<Post>,
}

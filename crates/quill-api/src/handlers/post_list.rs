use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::PostListResponse;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// List all blog posts, newest first. Public; no pagination.
#[utoipa::path(
    get,
    path = "/api/v1/blog/get-all-blogs",
    tag = "blog",
    responses(
        (status = 200, description = "All blog posts, newest first", body = PostListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_all_posts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let blogs = state.posts.get_all().await?;
    Ok(Json(PostListResponse {
        success: true,
        blogs,
    }))
}

use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::PostResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Fetch a single blog post by id. Public.
#[utoipa::path(
    get,
    path = "/api/v1/blog/{id}",
    tag = "blog",
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "The blog post", body = PostResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_post_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let post = state.posts.get_by_id(id).await?;
    Ok(Json(PostResponse {
        success: true,
        message: None,
        blog: post,
    }))
}

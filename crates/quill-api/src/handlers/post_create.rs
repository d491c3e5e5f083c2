use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::PostResponse;
use crate::state::AppState;
use crate::utils::multipart::parse_post_form;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Create a new blog post from a multipart form (`title`, `content`, up to 5
/// `photos` parts). Photos are uploaded to external storage before the post
/// record is inserted.
#[utoipa::path(
    post,
    path = "/api/v1/blog/add-blog",
    tag = "blog",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Blog created successfully", body = PostResponse),
        (status = 400, description = "Missing title/content or too many photos", body = ErrorResponse),
        (status = 401, description = "Admin token missing or invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "create_post"))]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = parse_post_form(multipart, state.config.max_photos_per_post).await?;

    let post = state
        .posts
        .create(
            form.title.unwrap_or_default(),
            form.content.unwrap_or_default(),
            form.photos,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            success: true,
            message: Some("Blog created successfully".to_string()),
            blog: post,
        }),
    ))
}

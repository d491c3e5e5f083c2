use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::PostResponse;
use crate::services::UpdatePost;
use crate::state::AppState;
use crate::utils::multipart::parse_post_form;
use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Update a blog post from a multipart form. All parts are optional; sending
/// any `photos` part replaces the whole attachment set (old objects are
/// removed from external storage first).
#[utoipa::path(
    put,
    path = "/api/v1/blog/{id}",
    tag = "blog",
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Blog updated successfully", body = PostResponse),
        (status = 401, description = "Admin token missing or invalid", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "update_post", post_id = %id))]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = parse_post_form(multipart, state.config.max_photos_per_post).await?;

    let post = state
        .posts
        .update(
            id,
            UpdatePost {
                title: form.title,
                content: form.content,
                files: form.photos,
            },
        )
        .await?;

    Ok(Json(PostResponse {
        success: true,
        message: Some("Blog updated successfully!".to_string()),
        blog: post,
    }))
}

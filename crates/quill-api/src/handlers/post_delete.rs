use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// Delete a blog post and its attachments. Attachment deletion is
/// best-effort; the post record is removed afterwards either way.
#[utoipa::path(
    delete,
    path = "/api/v1/blog/{id}",
    tag = "blog",
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog deleted successfully", body = MessageResponse),
        (status = 401, description = "Admin token missing or invalid", body = ErrorResponse),
        (status = 404, description = "Blog not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_post", post_id = %id))]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.posts.delete(id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Blog deleted successfully".to_string(),
    }))
}

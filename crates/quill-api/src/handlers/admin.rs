use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub secret_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminInfoResponse {
    pub success: bool,
    pub admin: bool,
}

/// Admin login: verifies the shared secret and sets the signed session
/// cookie (HttpOnly, Secure, SameSite=None, 10-day expiry).
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    tag = "admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, session cookie set", body = MessageResponse),
        (status = 401, description = "Invalid admin key", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, body), fields(operation = "admin_login"))]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let token = state.auth.login(&body.secret_key)?;
    let cookie = state.auth.session_cookie(&token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            success: true,
            message: "Authenticated Successfully, Welcome Admin!".to_string(),
        }),
    ))
}

/// Admin logout: clears the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    tag = "admin",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    )
)]
pub async fn admin_logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cookie = state.auth.clear_cookie();

    (
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            success: true,
            message: "Logged Out Successfully".to_string(),
        }),
    )
}

/// Return basic admin info; reachable only through the auth middleware.
#[utoipa::path(
    get,
    path = "/api/v1/admin/me",
    tag = "admin",
    responses(
        (status = 200, description = "Caller holds a valid admin session", body = AdminInfoResponse),
        (status = 401, description = "Admin token missing or invalid", body = ErrorResponse)
    )
)]
pub async fn get_admin_data() -> impl IntoResponse {
    Json(AdminInfoResponse {
        success: true,
        admin: true,
    })
}

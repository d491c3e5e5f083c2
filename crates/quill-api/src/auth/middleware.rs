//! Cookie-based admin auth middleware for protected routes.

use crate::auth::COOKIE_NAME;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use quill_core::AppError;
use std::sync::Arc;

/// Reject the request unless it carries a valid `Admin-Token` session cookie.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, HttpAppError> {
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| cookie_value(header, COOKIE_NAME))
        .ok_or_else(|| AppError::Unauthorized("Admin token missing".to_string()))?;

    state.auth.verify(token)?;

    Ok(next.run(request).await)
}

/// Extract one cookie's value from a `Cookie` request header.
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::auth::middleware::require_admin;
use crate::handlers;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Json, Router,
};
use quill_core::config::Config;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let cors = setup_cors(config)?;

    // Mutating blog routes and the dashboard require a valid session cookie;
    // reads and the login/logout pair stay public.
    let protected = protected_routes().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        require_admin,
    ));

    let app = public_routes()
        .merge(protected)
        .with_state(state)
        .merge(
            utoipa_rapidoc::RapiDoc::with_openapi("/api/openapi.json", ApiDoc::openapi())
                .path("/docs"),
        )
        .layer(DefaultBodyLimit::max(config.max_body_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Public routes (no session required)
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(|| async {
                Json(serde_json::json!({
                    "success": true,
                    "message": "API is working!",
                }))
            }),
        )
        .route(
            "/api/v1/blog/get-all-blogs",
            get(handlers::post_list::get_all_posts),
        )
        .route("/api/v1/blog/{id}", get(handlers::post_get::get_post_by_id))
        .route("/api/v1/admin/login", post(handlers::admin::admin_login))
        .route("/api/v1/admin/logout", post(handlers::admin::admin_logout))
}

/// Admin-only routes; the session middleware is layered on top in
/// [`setup_routes`].
fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/v1/blog/add-blog",
            post(handlers::post_create::create_post),
        )
        .route(
            "/api/v1/blog/{id}",
            put(handlers::post_update::update_post).delete(handlers::post_delete::delete_post),
        )
        .route("/api/v1/admin/me", get(handlers::admin::get_admin_data))
        .route(
            "/api/v1/admin/stats",
            get(handlers::dashboard::get_dashboard_stats),
        )
}

/// CORS locked to the frontend origin; credentials must be allowed for the
/// session cookie to travel cross-site.
fn setup_cors(config: &Config) -> Result<CorsLayer> {
    let origin: HeaderValue = config
        .frontend_url
        .parse()
        .with_context(|| format!("Invalid FRONTEND_URL: {}", config.frontend_url))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

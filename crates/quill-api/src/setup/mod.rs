//! Application setup and initialization
//!
//! All startup wiring lives here rather than in main.rs.

pub mod database;
pub mod routes;
pub mod server;

use crate::auth::AdminAuth;
use crate::services::{DashboardService, PostService};
use crate::state::AppState;
use anyhow::{Context, Result};
use quill_core::config::Config;
use quill_db::{PgPostStore, PostStore};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;
    crate::error::set_production(config.is_production());

    tracing::info!(environment = %config.environment, "Configuration loaded");

    let pool = database::setup_database(&config).await?;

    let storage = quill_storage::create_storage(&config)
        .await
        .context("Failed to initialize object storage")?;
    tracing::info!(backend = ?storage.backend_type(), "Object storage ready");

    let store: Arc<dyn PostStore> = Arc::new(PgPostStore::new(pool));

    let state = Arc::new(AppState {
        posts: PostService::new(store.clone(), storage, config.max_photos_per_post),
        dashboard: DashboardService::new(store),
        auth: AdminAuth::new(&config),
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

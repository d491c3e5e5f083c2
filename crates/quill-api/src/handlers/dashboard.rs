use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use quill_core::models::DashboardStats;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: DashboardStats,
}

/// Dashboard statistics: total post count, 7-day creation histogram, the 5
/// most recent posts, and the 10 most recent create/update activities.
///
/// The snapshot is computed against the current instant, injected here at
/// the boundary so the aggregation itself stays clock-free.
#[utoipa::path(
    get,
    path = "/api/v1/admin/stats",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard snapshot", body = StatsResponse),
        (status = 401, description = "Admin token missing or invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "dashboard_stats"))]
pub async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let stats = state.dashboard.compute(Utc::now()).await?;

    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

use axum::{extract::State, Json};
use luct_core::models::stats::DashboardStats;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Portal-wide counts. The store runs the underlying reads concurrently.
#[axum::debug_handler]
pub async fn dashboard_stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(state.store.dashboard_stats().await?))
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

/// Read-only aggregate and search endpoints.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/dashboard-stats",
            get(handlers::dashboard::dashboard_stats),
        )
        .route(
            "/api/search/lecturer-reports",
            get(handlers::search::search_lecturer_reports),
        )
        .route("/api/search/courses", get(handlers::search::search_courses))
}

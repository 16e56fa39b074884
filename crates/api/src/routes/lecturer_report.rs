use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::lecturer_report, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/lecturer-reports",
            get(lecturer_report::list_reports).post(lecturer_report::create_report),
        )
        .route(
            "/api/lecturer-reports/:id",
            get(lecturer_report::get_report)
                .put(lecturer_report::update_report)
                .delete(lecturer_report::delete_report),
        )
}

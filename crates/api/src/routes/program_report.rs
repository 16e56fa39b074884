use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::program_report, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/program-reports",
            get(program_report::list_program_reports)
                .post(program_report::create_program_report),
        )
        .route(
            "/api/program-reports/:id",
            get(program_report::get_program_report)
                .put(program_report::update_program_report)
                .delete(program_report::delete_program_report),
        )
}

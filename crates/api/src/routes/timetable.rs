use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::timetable, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/timetable",
        get(timetable::list_timetable).post(timetable::create_timetable_entry),
    )
}

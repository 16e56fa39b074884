use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::course, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/courses",
            get(course::list_courses).post(course::create_course),
        )
        .route(
            "/api/courses/:id",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::rating, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/ratings",
            get(rating::list_ratings).post(rating::save_rating),
        )
        .route("/api/ratings/user/:user_id", get(rating::list_user_ratings))
}

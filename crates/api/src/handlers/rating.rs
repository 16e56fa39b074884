use axum::{extract::State, http::StatusCode, Json};
use luct_core::models::rating::{Rating, SaveRatingRequest, SavedRating};
use std::sync::Arc;

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn list_ratings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Rating>>, AppError> {
    Ok(Json(state.store.list_ratings().await?))
}

#[axum::debug_handler]
pub async fn list_user_ratings(
    State(state): State<Arc<ApiState>>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Json<Vec<Rating>>, AppError> {
    Ok(Json(state.store.list_ratings_by_user(user_id).await?))
}

/// Saves a rating, replacing any earlier rating by the same user for the same
/// day and course. Responds 201 for a new row and 200 for an overwrite.
#[axum::debug_handler]
pub async fn save_rating(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<SaveRatingRequest>,
) -> Result<(StatusCode, Json<Rating>), AppError> {
    payload.validate()?;

    let response = match state.store.save_rating(payload).await? {
        SavedRating::Created(rating) => (StatusCode::CREATED, Json(rating)),
        SavedRating::Updated(rating) => (StatusCode::OK, Json(rating)),
    };
    Ok(response)
}

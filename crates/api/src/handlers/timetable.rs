use axum::{extract::State, http::StatusCode, Json};
use luct_core::models::timetable::{CreateTimetableEntryRequest, TimetableEntry};
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiJson},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_timetable(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    Ok(Json(state.store.list_timetable().await?))
}

#[axum::debug_handler]
pub async fn create_timetable_entry(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateTimetableEntryRequest>,
) -> Result<(StatusCode, Json<TimetableEntry>), AppError> {
    let entry = state.store.create_timetable_entry(payload).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

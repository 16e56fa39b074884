//! Case-insensitive substring search. A missing or empty `query` matches
//! every row; results are newest first.

use axum::{extract::State, Json};
use luct_core::models::{course::Course, lecturer_report::LecturerReport, stats::SearchQuery};
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiQuery},
    ApiState,
};

#[axum::debug_handler]
pub async fn search_lecturer_reports(
    State(state): State<Arc<ApiState>>,
    ApiQuery(params): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<LecturerReport>>, AppError> {
    Ok(Json(state.store.search_lecturer_reports(params.query).await?))
}

#[axum::debug_handler]
pub async fn search_courses(
    State(state): State<Arc<ApiState>>,
    ApiQuery(params): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.store.search_courses(params.query).await?))
}

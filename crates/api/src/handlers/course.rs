use axum::{extract::State, http::StatusCode, Json};
use luct_core::{
    errors::PortalError,
    models::course::{Course, CreateCourseRequest, UpdateCourseRequest},
};
use std::sync::Arc;

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

fn not_found() -> PortalError {
    PortalError::NotFound("Course not found".to_string())
}

#[axum::debug_handler]
pub async fn list_courses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.store.list_courses().await?))
}

#[axum::debug_handler]
pub async fn get_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Course>, AppError> {
    let course = state.store.get_course(id).await?.ok_or_else(not_found)?;
    Ok(Json(course))
}

#[axum::debug_handler]
pub async fn create_course(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = state.store.create_course(payload).await?;
    tracing::info!(course_id = course.id, course_code = %course.course_code, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

#[axum::debug_handler]
pub async fn update_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    payload.validate()?;

    let course = state
        .store
        .update_course(id, payload)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(course))
}

#[axum::debug_handler]
pub async fn delete_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Course>, AppError> {
    let course = state.store.delete_course(id).await?.ok_or_else(not_found)?;
    Ok(Json(course))
}

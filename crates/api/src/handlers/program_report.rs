use axum::{extract::State, http::StatusCode, Json};
use luct_core::{
    errors::PortalError,
    models::program_report::{
        CreateProgramReportRequest, ProgramReport, UpdateProgramReportRequest,
    },
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
    PortalError::NotFound("Program report not found".to_string())
}

#[axum::debug_handler]
pub async fn list_program_reports(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ProgramReport>>, AppError> {
    Ok(Json(state.store.list_program_reports().await?))
}

#[axum::debug_handler]
pub async fn get_program_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ProgramReport>, AppError> {
    let report = state
        .store
        .get_program_report(id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn create_program_report(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateProgramReportRequest>,
) -> Result<(StatusCode, Json<ProgramReport>), AppError> {
    let report = state.store.create_program_report(payload).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

#[axum::debug_handler]
pub async fn update_program_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateProgramReportRequest>,
) -> Result<Json<ProgramReport>, AppError> {
    payload.validate()?;

    let report = state
        .store
        .update_program_report(id, payload)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn delete_program_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<ProgramReport>, AppError> {
    let report = state
        .store
        .delete_program_report(id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(report))
}

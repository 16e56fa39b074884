//! # Lecturer Report Handlers
//!
//! CRUD for per-lecture reports. Updates accept any subset of report fields
//! (camelCase or column names); see [`ReportPatch`] for the accepted keys.

use axum::{extract::State, http::StatusCode, Json};
use luct_core::{
    errors::PortalError,
    models::lecturer_report::{CreateLecturerReportRequest, LecturerReport, ReportPatch},
};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

fn not_found() -> PortalError {
    PortalError::NotFound("Report not found".to_string())
}

#[axum::debug_handler]
pub async fn list_reports(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<LecturerReport>>, AppError> {
    let reports = state.store.list_lecturer_reports().await?;
    Ok(Json(reports))
}

#[axum::debug_handler]
pub async fn get_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<LecturerReport>, AppError> {
    let report = state
        .store
        .get_lecturer_report(id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn create_report(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateLecturerReportRequest>,
) -> Result<(StatusCode, Json<LecturerReport>), AppError> {
    let report = state.store.create_lecturer_report(payload).await?;
    tracing::info!(report_id = report.id, course_code = %report.course_code, "Lecturer report created");
    Ok((StatusCode::CREATED, Json(report)))
}

/// Applies a partial update
///
/// # Errors
///
/// * `PortalError::Validation` - Unknown key, wrongly typed value, or nothing to update
/// * `PortalError::NotFound` - No report with this ID
#[axum::debug_handler]
pub async fn update_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> Result<Json<LecturerReport>, AppError> {
    let patch = ReportPatch::from_payload(payload)?;

    let report = state
        .store
        .update_lecturer_report(id, patch)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn delete_report(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<LecturerReport>, AppError> {
    let report = state
        .store
        .delete_lecturer_report(id)
        .await?
        .ok_or_else(not_found)?;
    tracing::info!(report_id = report.id, "Lecturer report deleted");
    Ok(Json(report))
}

//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and `{ "error": message }` bodies,
//! and provides the router-level fallbacks: unknown routes, request timeouts
//! and panicking handlers.
//!
//! Database and internal failures are logged here with full detail and reach
//! the client only as "Internal server error".

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use luct_core::errors::PortalError;
use serde_json::json;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `PortalError` instances and implements `IntoResponse`
/// so handlers can return `Result<T, AppError>` and use `?` freely.
#[derive(Debug)]
pub struct AppError(pub PortalError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::Conflict(_) => StatusCode::BAD_REQUEST,
            PortalError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            PortalError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            PortalError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.is_internal() {
            error!(error = ?self.0, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<PortalError> for AppError {
    fn from(err: PortalError) -> Self {
        AppError(err)
    }
}

/// Failures reported through `eyre` come from infrastructure, never from the client.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(PortalError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(PortalError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(PortalError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(PortalError::Validation(rejection.body_text()))
    }
}

/// Maps a PortalError to an HTTP response
pub fn map_error(err: PortalError) -> Response {
    AppError(err).into_response()
}

/// Fallback for any path no route matches.
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
        .into_response()
}

/// Converts errors raised by the tower timeout layer.
pub async fn handle_timeout_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError(PortalError::Timeout)
    } else {
        AppError(PortalError::Internal(err))
    }
}

/// Response for a handler that panicked.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

//! Drop-in replacements for axum's `Json`, `Path` and `Query` extractors whose
//! rejections become [`AppError`] validation failures, keeping every error
//! response in the `{ "error": ... }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use super::error_handling::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

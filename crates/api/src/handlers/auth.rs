//! # Credential Handlers
//!
//! Registration, login and logout. There is no server-side session: login
//! flips the account's `is_logged_in` flag and the client keeps the returned
//! role for later requests.

use axum::{extract::State, http::StatusCode, Json};
use luct_core::{
    errors::PortalError,
    models::user::{
        AuthResponse, LoginRequest, LogoutRequest, MessageResponse, NewUser, PublicUser,
        RegisterRequest, User,
    },
};
use std::sync::Arc;
use tracing::info;

use crate::{
    middleware::{
        auth,
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn require(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError(PortalError::Validation(format!("{} is required", name))));
    }
    Ok(())
}

/// Registers a new account
///
/// Uniqueness of username and email is decided by the store's constraints,
/// so two concurrent registrations for the same name cannot both succeed.
///
/// # Errors
///
/// * `PortalError::Validation` - Missing username, email or password, or unknown role
/// * `PortalError::Conflict` - Username or email already in use
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    require(&payload.username, "username")?;
    require(&payload.email, "email")?;
    require(&payload.password, "password")?;

    info!(username = %payload.username, role = %payload.role, "Registration attempt");

    let password_hash = auth::hash_password_blocking(payload.password)
        .await
        .map_err(|e| PortalError::Internal(e.into()))?;

    let user = state
        .store
        .create_user(NewUser {
            username: payload.username,
            email: payload.email,
            password_hash,
            role: payload.role,
            full_name: payload.full_name,
            phone_number: payload.phone_number,
            department: payload.department,
        })
        .await?;

    info!(user_id = user.id, "Registration successful");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            user: user.into(),
        }),
    ))
}

/// Logs a user in
///
/// The account is looked up by username *and* role; a correct password under
/// the wrong role fails exactly like a wrong password.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!(username = %payload.username, role = %payload.role, "Login attempt");

    let credentials = state
        .store
        .find_credentials(payload.username, payload.role)
        .await?
        .ok_or_else(|| PortalError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let verified = auth::verify_password_blocking(credentials.password_hash, payload.password)
        .await
        .map_err(|e| PortalError::Internal(e.into()))?;
    if !verified {
        return Err(AppError(PortalError::Unauthorized(
            INVALID_CREDENTIALS.to_string(),
        )));
    }

    state.store.set_logged_in(credentials.user.id, true).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: PublicUser::from(credentials.user),
    }))
}

/// Clears the login flag. Succeeds whether or not a matching account exists.
#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<LogoutRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = state.store.logout(payload.username, payload.role).await?;
    tracing::debug!("Logout cleared {} account(s)", affected);

    Ok(Json(MessageResponse::new("Logout successful")))
}

/// Returns an account without its password, including the login flag.
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| PortalError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

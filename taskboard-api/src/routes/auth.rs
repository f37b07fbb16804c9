/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/register` - Create a new account
/// - `POST /api/login` - Re-verify credentials
///
/// No session or token is issued: login simply confirms the
/// credentials and returns the user record. Callers resend their
/// user id on subsequent task requests.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::password,
    models::user::{CreateUser, User},
};

/// Credentials request, shared by register and login
///
/// Login ignores `username`; the lookup key is `email`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Display name
    pub username: String,

    /// Email address (login identifier)
    pub email: String,

    /// Plaintext password (hashed before storage, never persisted)
    pub password: String,
}

/// User record returned by auth and user-lookup endpoints
///
/// Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id
    pub id: i32,

    /// Display name
    pub username: String,

    /// Email address
    pub email: String,

    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Register a new user
///
/// Hashes the password and persists a new user row. A duplicate email
/// is a conflict; the first account is unaffected.
///
/// # Endpoint
///
/// ```text
/// POST /api/register
/// Content-Type: application/json
///
/// {
///   "username": "jdoe",
///   "email": "user@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Email already registered
/// - `500 Internal Server Error`: Storage or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<UserResponse>> {
    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Registered new user");

    Ok(Json(user.into()))
}

/// Login endpoint
///
/// Looks the user up by email and verifies the password. The error
/// message is identical for an unknown email and a wrong password so
/// the response does not leak which one failed.
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// {
///   "username": "ignored",
///   "email": "user@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `500 Internal Server Error`: Storage failure or malformed stored hash
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Incorrect email or password".to_string(),
        ));
    }

    Ok(Json(user.into()))
}

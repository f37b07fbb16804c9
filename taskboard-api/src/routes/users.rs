/// User lookup endpoint
///
/// # Endpoints
///
/// - `GET /api/user/:id` - Fetch a user record by id

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::auth::UserResponse,
};
use axum::{
    extract::{Path, State},
    Json,
};
use taskboard_shared::models::user::User;

/// User lookup handler
///
/// ```text
/// GET /api/user/1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with that id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// Liveness and database status endpoints
///
/// # Endpoints
///
/// - `GET /` - Static liveness message
/// - `GET /api/db-status` - Database connectivity report
///
/// The db-status endpoint is the one place that deliberately catches a
/// storage error and reports it as structured data: a failed check
/// still answers HTTP 200 with `status: "error"` and the underlying
/// error text.

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::db::pool::connectivity_check;

/// Generic message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Database status response
#[derive(Debug, Serialize, Deserialize)]
pub struct DbStatusResponse {
    /// "ok" or "error"
    pub status: String,

    /// Success confirmation or the underlying error text
    pub message: String,
}

/// Root handler
///
/// Returns a static liveness message.
///
/// ```text
/// GET /
/// ```
///
/// Response:
/// ```json
/// { "message": "Backend is running!" }
/// ```
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Backend is running!".to_string(),
    })
}

/// Database status handler
///
/// Attempts a trivial query and reports the outcome. Never an HTTP
/// error; storage failures come back as data.
///
/// ```text
/// GET /api/db-status
/// ```
///
/// Response:
/// ```json
/// { "status": "ok", "message": "Database connection successful" }
/// ```
pub async fn db_status(State(state): State<AppState>) -> Json<DbStatusResponse> {
    match connectivity_check(&state.db).await {
        Ok(()) => Json(DbStatusResponse {
            status: "ok".to_string(),
            message: "Database connection successful".to_string(),
        }),
        Err(e) => Json(DbStatusResponse {
            status: "error".to_string(),
            message: e.to_string(),
        }),
    }
}

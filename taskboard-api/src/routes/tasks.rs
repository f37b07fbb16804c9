/// Task CRUD endpoints
///
/// # Endpoints
///
/// - `GET /api/tasks?user_id=` - List a user's tasks
/// - `POST /api/tasks` - Create a task
/// - `PUT /api/tasks/:id` - Update a task (ownership checked)
/// - `DELETE /api/tasks/:id?user_id=` - Delete a task (ownership checked)
///
/// Ownership is a shallow check: the caller-supplied `user_id` must
/// match the task's stored owner. A mismatch answers Not Found, the
/// same as a missing task.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::health::MessageResponse,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_shared::models::task::{CreateTask, Task, UpdateTask, DEFAULT_STATUS};

/// Query parameters identifying the calling user
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    /// Caller-supplied user id
    pub user_id: i32,
}

/// Create-task request body
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Free-form status string, defaults to "todo"
    #[serde(default = "default_status")]
    pub status: String,

    /// Owning user id
    pub user_id: i32,
}

/// Update-task request body
///
/// `user_id` is the ownership check, not a reassignment: the stored
/// owner never changes.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    /// New title
    pub title: String,

    /// New description (absent clears it)
    #[serde(default)]
    pub description: Option<String>,

    /// New status string
    pub status: String,

    /// Caller-supplied user id
    pub user_id: i32,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Task record returned by all task endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task id
    pub id: i32,

    /// Title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Free-form status string
    pub status: String,

    /// Creation time (immutable)
    pub created_at: DateTime<Utc>,

    /// Last mutation time
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// List all tasks owned by the given user
///
/// ```text
/// GET /api/tasks?user_id=1
/// ```
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = Task::list_by_user(&state.db, query.user_id).await?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// Create a new task
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// {
///   "title": "Ship the release",
///   "description": "Tag and push",
///   "status": "todo",
///   "user_id": 1
/// }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: Storage failure (including a
///   `user_id` that references no user)
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = Task::create(
        &state.db,
        CreateTask {
            user_id: req.user_id,
            title: req.title,
            description: req.description,
            status: req.status,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, user_id = task.user_id, "Created task");

    Ok(Json(task.into()))
}

/// Update an existing task
///
/// The task must match both the path id and the body's `user_id`;
/// otherwise Not Found. Overwrites title, description, and status, and
/// refreshes `updated_at`.
///
/// ```text
/// PUT /api/tasks/42
/// Content-Type: application/json
///
/// {
///   "title": "Ship the release",
///   "status": "done",
///   "user_id": 1
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task matches (id, user_id)
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = Task::update_owned(
        &state.db,
        id,
        req.user_id,
        UpdateTask {
            title: req.title,
            description: req.description,
            status: req.status,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task.into()))
}

/// Delete a task
///
/// The task must match both the path id and the query's `user_id`;
/// otherwise Not Found.
///
/// ```text
/// DELETE /api/tasks/42?user_id=1
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No task matches (id, user_id)
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<OwnerQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Task::delete_owned(&state.db, id, query.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(task_id = id, user_id = query.user_id, "Deleted task");

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

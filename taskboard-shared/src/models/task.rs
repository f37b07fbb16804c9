/// Task model and database operations
///
/// Tasks are the core entity of Taskboard: user-owned to-do items with
/// a free-form status string (default "todo"; no enumerated set is
/// enforced). Update and delete require the caller-supplied user id to
/// match the stored owner, expressed as a combined `WHERE id AND
/// user_id` predicate so a mismatch is indistinguishable from a missing
/// row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id          SERIAL PRIMARY KEY,
///     user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     title       VARCHAR(100) NOT NULL,
///     description TEXT,
///     status      VARCHAR(20) NOT NULL DEFAULT 'todo',
///     created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{Task, CreateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     user_id: 1,
///     title: "Ship the release".to_string(),
///     description: Some("Tag and push".to_string()),
///     status: "todo".to_string(),
/// }).await?;
///
/// let mine = Task::list_by_user(&pool, 1).await?;
/// assert!(mine.iter().any(|t| t.id == task.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// Default status assigned to newly created tasks
pub const DEFAULT_STATUS: &str = "todo";

/// Task model representing a user-owned to-do item
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id, assigned by storage
    pub id: i32,

    /// Owning user; every task belongs to exactly one user
    pub user_id: i32,

    /// Short title
    pub title: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Free-form status string, defaults to "todo"
    pub status: String,

    /// When the task was created (immutable)
    pub created_at: DateTime<Utc>,

    /// When the task was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Owning user id
    pub user_id: i32,

    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Status string (callers default this to "todo")
    pub status: String,
}

/// Input for updating an existing task
///
/// The owner cannot be reassigned; `user_id` participates only in the
/// ownership check.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New description (None clears it)
    pub description: Option<String>,

    /// New status string
    pub status: String,
}

impl Task {
    /// Creates a new task
    ///
    /// # Returns
    ///
    /// The newly created task with storage-assigned id and timestamps
    ///
    /// # Errors
    ///
    /// Returns an error if `user_id` references no existing user
    /// (foreign key violation) or the database is unreachable
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, status, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks owned by a user
    ///
    /// Rows come back in id order (insertion order) for a stable,
    /// pagination-free listing.
    pub async fn list_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, status, created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Updates a task after checking ownership
    ///
    /// Overwrites title, description, and status, and refreshes
    /// `updated_at`. The row must match both `id` and `user_id`; the
    /// owner itself is never changed.
    ///
    /// # Returns
    ///
    /// The updated task, or None if no row matched (absent or owned by
    /// someone else)
    pub async fn update_owned(
        pool: &PgPool,
        id: i32,
        user_id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $3, description = $4, status = $5, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.status)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task after checking ownership
    ///
    /// # Returns
    ///
    /// True if a row was deleted, false if no row matched (absent or
    /// owned by someone else)
    pub async fn delete_owned(pool: &PgPool, id: i32, user_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(DEFAULT_STATUS, "todo");
    }

    #[test]
    fn test_create_task_struct() {
        let create_task = CreateTask {
            user_id: 7,
            title: "Write docs".to_string(),
            description: None,
            status: DEFAULT_STATUS.to_string(),
        };

        assert_eq!(create_task.user_id, 7);
        assert_eq!(create_task.status, "todo");
    }

    #[test]
    fn test_task_serializes_with_owner() {
        let task = Task {
            id: 1,
            user_id: 7,
            title: "Write docs".to_string(),
            description: Some("For the release".to_string()),
            status: "in_progress".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["status"], "in_progress");
    }

    // Integration tests for database operations are in taskboard-api/tests/
}

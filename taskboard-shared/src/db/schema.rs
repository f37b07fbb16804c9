/// Startup schema creation
///
/// Taskboard carries no migration versioning: the schema is two tables
/// created with idempotent `CREATE TABLE IF NOT EXISTS` statements at
/// process start. Running against an already-initialized database is a
/// no-op.
///
/// # Schema
///
/// Tasks belong to exactly one user and cascade-delete with them.

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            SERIAL PRIMARY KEY,
    username      VARCHAR(50)  NOT NULL UNIQUE,
    email         VARCHAR(100) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at    TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)
"#;

const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id          SERIAL PRIMARY KEY,
    user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title       VARCHAR(100) NOT NULL,
    description TEXT,
    status      VARCHAR(20) NOT NULL DEFAULT 'todo',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Creates the users and tasks tables if they do not exist
///
/// # Errors
///
/// Returns an error if either DDL statement fails to execute
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema exists");

    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_TASKS_TABLE).execute(pool).await?;

    info!("Database schema is ready");
    Ok(())
}

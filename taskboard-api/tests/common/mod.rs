/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and cleanup
/// - Router construction against the real schema
/// - JSON request helpers
///
/// Integration tests need a reachable Postgres via `DATABASE_URL`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::Config;
use taskboard_shared::db::schema::init_schema;
use tower::Service as _;

static SUFFIX_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Produces a suffix unique across the test run
///
/// Both username and email carry UNIQUE constraints, so every
/// registration needs fresh values even across repeated runs against
/// the same database.
pub fn unique_suffix() -> String {
    let n = SUFFIX_COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{}-{}", nanos, n)
}

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    /// User ids created through this context, removed at cleanup
    created_users: Vec<i32>,
}

impl TestContext {
    /// Creates a new test context against the configured database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;
        init_schema(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext {
            db,
            app,
            created_users: Vec::new(),
        })
    }

    /// Registers a user through the API and returns (id, email)
    pub async fn register_user(
        &mut self,
        prefix: &str,
        password: &str,
    ) -> anyhow::Result<(i32, String)> {
        let username = format!("{}-{}", prefix, unique_suffix());
        let email = format!("{}@example.com", username);

        let (status, body) = self
            .request(
                "POST",
                "/api/register",
                Some(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                })),
            )
            .await?;

        anyhow::ensure!(
            status == StatusCode::OK,
            "registration failed with {}: {}",
            status,
            body
        );

        let id = body["id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("registration response missing id"))? as i32;
        self.created_users.push(id);
        Ok((id, email))
    }

    /// Creates a task through the API and returns its id
    pub async fn create_task(&mut self, user_id: i32, title: &str) -> anyhow::Result<i32> {
        let (status, body) = self
            .request(
                "POST",
                "/api/tasks",
                Some(serde_json::json!({
                    "title": title,
                    "user_id": user_id,
                })),
            )
            .await?;

        anyhow::ensure!(
            status == StatusCode::OK,
            "task creation failed with {}: {}",
            status,
            body
        );

        let id = body["id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("task response missing id"))? as i32;
        Ok(id)
    }

    /// Sends a JSON request through the router and returns status + parsed body
    pub async fn request(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                builder.body(Body::from(json.to_string()))?
            }
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().call(request).await?;
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok((status, json))
    }

    /// Removes users created through this context; tasks cascade
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        for id in &self.created_users {
            sqlx::query("DELETE FROM users WHERE id = $1")
                .bind(id)
                .execute(&self.db)
                .await?;
        }
        Ok(())
    }
}

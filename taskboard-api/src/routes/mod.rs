/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Liveness message and database status report
/// - `auth`: Registration and login
/// - `tasks`: Task CRUD with ownership checks
/// - `users`: User lookup

pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a connection pool and clones share it.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Handlers pass a reference to it into `TaskService::new`, which in turn hands it
    /// to the repository.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

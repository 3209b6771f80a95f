//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// State handed to every API handler through Axum's state extraction.
///
/// Initialized once during startup and cloned per request; the database
/// connection is a pool handle, so clones share the underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

//! Application state shared across handlers

use sea_orm::DatabaseConnection;

/// Shared application state. Holds the injected persistence client.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool, opened at startup and closed after shutdown
    pub db: DatabaseConnection,
}

impl AppState {
    /// Wraps an already-opened connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

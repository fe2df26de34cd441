//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory test databases and
//! building payloads with sensible defaults.

use crate::{errors::Result, models::ItemPayload};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds an item payload with no description or tax.
pub fn item_payload(name: &str, price: f64) -> ItemPayload {
    ItemPayload {
        name: name.to_string(),
        description: None,
        price,
        tax: None,
    }
}

//! Database configuration module.
//!
//! This module opens the SeaORM connection pool and creates all tables from the
//! entity definitions. SeaORM's `Schema::create_table_from_entity` generates the
//! DDL, so the schema always matches the Rust structs. Tables are created with
//! `IF NOT EXISTS`; there is no migration versioning.

use crate::entities::{Item, Merchant, Transaction, Wallet};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, sea_query::TableCreateStatement,
};
use tracing::{debug, info, instrument};

/// Opens the connection pool for `database_url`.
///
/// The URL scheme picks the backend (`sqlite:` or `postgres:`).
#[instrument(skip(database_url))]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

fn table_statement<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    statement
}

/// Creates the items, wallets, merchants and transactions tables if absent.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        table_statement(&schema, Item),
        table_statement(&schema, Wallet),
        table_statement(&schema, Merchant),
        table_statement(&schema, Transaction),
    ];

    for statement in &statements {
        db.execute(builder.build(statement)).await?;
    }

    info!("Database tables ensured.");
    Ok(())
}

/// Connects and ensures the schema in one step. Used at startup.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

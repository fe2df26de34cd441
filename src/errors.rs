use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Every failure the service can report, from startup through request handling.
#[derive(Debug, Error)]
pub enum Error {
    /// The config file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any failure reported by SeaORM or the driver underneath it
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// A lookup by primary key matched no row.
    #[error("{entity} not found")]
    NotFound {
        /// Entity name, e.g. `"Item"`
        entity: &'static str,
        /// The id that was looked up
        id: i64,
    },

    /// A caller-supplied primary key collided with an existing row.
    #[error("{entity} {id} already exists")]
    Conflict {
        /// Entity name, e.g. `"Wallet"`
        entity: &'static str,
        /// The id that is already taken
        id: i64,
    },

    /// The request body or path did not match the expected types
    #[error("Invalid request: {message}")]
    Validation {
        /// Deserializer message naming the offending field
        message: String,
    },

    /// Socket or filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `bind_addr` is not a valid socket address
    #[error("Invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// Maps a failed insert to `Conflict` when the database reports a duplicate key.
    pub(crate) fn from_insert(err: DbErr, entity: &'static str, id: i64) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict { entity, id },
            _ => Self::Database(err),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

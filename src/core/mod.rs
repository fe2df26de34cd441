//! Persistence operations - one function per database round-trip.
//!
//! Every function takes the injected [`sea_orm::DatabaseConnection`] and returns the
//! entity record. Reads borrow a pooled connection for the single query;
//! read-then-write operations run inside a [`sea_orm::DatabaseTransaction`],
//! which rolls back on drop if it is not committed.

pub mod item;
pub mod merchant;
pub mod transaction;
pub mod wallet;

use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

/// Fails with `Conflict` when a caller-supplied primary key is already taken.
pub(crate) async fn ensure_vacant<E, C>(conn: &C, entity: &'static str, id: i64) -> Result<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i64: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    if E::find_by_id(id).one(conn).await?.is_some() {
        return Err(Error::Conflict { entity, id });
    }
    Ok(())
}

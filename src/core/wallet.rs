//! Wallet operations - create and read only.

use crate::{
    core::ensure_vacant,
    entities::{Wallet, wallet},
    errors::{Error, Result},
    models::WalletPayload,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument, warn};

/// Name used in not-found and conflict responses.
pub const ENTITY: &str = "Wallet";

/// Inserts a wallet. The id in the payload is used as the primary key.
///
/// # Errors
/// Returns `Error::Conflict` if the id is already taken.
#[instrument(skip(db))]
pub async fn create_wallet(db: &DatabaseConnection, payload: WalletPayload) -> Result<wallet::Model> {
    let txn = db.begin().await?;
    ensure_vacant::<Wallet, _>(&txn, ENTITY, payload.id).await?;

    let wallet = wallet::ActiveModel {
        id: Set(payload.id),
        balance: Set(payload.balance),
    };

    let model = wallet
        .insert(&txn)
        .await
        .map_err(|e| Error::from_insert(e, ENTITY, payload.id))?;
    txn.commit().await?;

    info!(wallet_id = model.id, balance = model.balance, "Created wallet");
    Ok(model)
}

/// Retrieves a wallet by id.
///
/// # Errors
/// Returns `Error::NotFound` if no wallet has this id.
#[instrument(skip(db))]
pub async fn get_wallet(db: &DatabaseConnection, wallet_id: i64) -> Result<wallet::Model> {
    Wallet::find_by_id(wallet_id).one(db).await?.ok_or_else(|| {
        warn!(wallet_id, "Wallet not found");
        Error::NotFound {
            entity: ENTITY,
            id: wallet_id,
        }
    })
}

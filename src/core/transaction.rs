//! Transaction operations - create and read only.
//!
//! Recording a transaction is a single insert. It does not check that the
//! merchant exists and does not debit any wallet.

use crate::{
    core::ensure_vacant,
    entities::{Transaction, transaction},
    errors::{Error, Result},
    models::TransactionPayload,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument, warn};

/// Name used in not-found and conflict responses.
pub const ENTITY: &str = "Transaction";

/// Inserts a transaction record under the id given in the payload.
///
/// # Errors
/// Returns `Error::Conflict` if the id is already taken.
#[instrument(skip(db))]
pub async fn create_transaction(
    db: &DatabaseConnection,
    payload: TransactionPayload,
) -> Result<transaction::Model> {
    let txn = db.begin().await?;
    ensure_vacant::<Transaction, _>(&txn, ENTITY, payload.id).await?;

    let record = transaction::ActiveModel {
        id: Set(payload.id),
        user_id: Set(payload.user_id),
        amount: Set(payload.amount),
        merchant_id: Set(payload.merchant_id),
    };

    let model = record
        .insert(&txn)
        .await
        .map_err(|e| Error::from_insert(e, ENTITY, payload.id))?;
    txn.commit().await?;

    info!(
        "Created transaction_id {} for merchant_id {}: amount={}, user_id={}",
        model.id, model.merchant_id, model.amount, model.user_id
    );
    Ok(model)
}

/// Retrieves a transaction by id.
#[instrument(skip(db))]
pub async fn get_transaction(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<transaction::Model> {
    Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            warn!(transaction_id, "Transaction not found");
            Error::NotFound {
                entity: ENTITY,
                id: transaction_id,
            }
        })
}

//! Merchant operations - create and read only.

use crate::{
    core::ensure_vacant,
    entities::{Merchant, merchant},
    errors::{Error, Result},
    models::MerchantPayload,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, instrument, warn};

/// Name used in not-found and conflict responses.
pub const ENTITY: &str = "Merchant";

/// Inserts a merchant under the id given in the payload.
///
/// # Errors
/// Returns `Error::Conflict` if the id is already taken.
#[instrument(skip(db))]
pub async fn create_merchant(
    db: &DatabaseConnection,
    payload: MerchantPayload,
) -> Result<merchant::Model> {
    let txn = db.begin().await?;
    ensure_vacant::<Merchant, _>(&txn, ENTITY, payload.id).await?;

    let merchant = merchant::ActiveModel {
        id: Set(payload.id),
        name: Set(payload.name),
    };

    let model = merchant
        .insert(&txn)
        .await
        .map_err(|e| Error::from_insert(e, ENTITY, payload.id))?;
    txn.commit().await?;

    info!(merchant_id = model.id, name = %model.name, "Created merchant");
    Ok(model)
}

/// Retrieves a merchant by id.
#[instrument(skip(db))]
pub async fn get_merchant(db: &DatabaseConnection, merchant_id: i64) -> Result<merchant::Model> {
    Merchant::find_by_id(merchant_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            warn!(merchant_id, "Merchant not found");
            Error::NotFound {
                entity: ENTITY,
                id: merchant_id,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_merchant() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_merchant(
            &db,
            MerchantPayload {
                id: 3,
                name: "Corner Shop".to_string(),
            },
        )
        .await?;
        let fetched = get_merchant(&db, 3).await?;

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Corner Shop");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_merchant_duplicate_id() -> Result<()> {
        let db = setup_test_db().await?;
        let payload = MerchantPayload {
            id: 3,
            name: "Corner Shop".to_string(),
        };
        create_merchant(&db, payload.clone()).await?;

        let result = create_merchant(&db, payload).await;
        assert!(matches!(result, Err(Error::Conflict { id: 3, .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_merchant_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_merchant(&db, 1).await;
        assert!(matches!(result, Err(Error::NotFound { entity: "Merchant", id: 1 })));

        Ok(())
    }
}

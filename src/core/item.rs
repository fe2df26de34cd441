//! Item operations - the only entity with the full create/read/list/update/delete set.
//!
//! An update is a full replacement: every mutable column is overwritten from the
//! payload, nothing is merged with the stored row. Update and delete on a missing
//! id fail with [`Error::NotFound`].

use crate::{
    entities::{Item, item},
    errors::{Error, Result},
    models::ItemPayload,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Name used in not-found responses.
pub const ENTITY: &str = "Item";

fn not_found(item_id: i64) -> Error {
    warn!(item_id, "Item not found");
    Error::NotFound {
        entity: ENTITY,
        id: item_id,
    }
}

/// Inserts a new item and returns it with its assigned id.
#[instrument(skip(db))]
pub async fn create_item(db: &DatabaseConnection, payload: ItemPayload) -> Result<item::Model> {
    let model = item::ActiveModel {
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        tax: Set(payload.tax),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(item_id = model.id, name = %model.name, "Created item");
    Ok(model)
}

/// Retrieves all items, ordered by id.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<item::Model>> {
    let items = Item::find().order_by_asc(item::Column::Id).all(db).await?;
    debug!(count = items.len(), "Listed items");
    Ok(items)
}

/// Retrieves a specific item by its id.
///
/// # Errors
/// Returns `Error::NotFound` if no item has this id.
#[instrument(skip(db))]
pub async fn get_item(db: &DatabaseConnection, item_id: i64) -> Result<item::Model> {
    Item::find_by_id(item_id)
        .one(db)
        .await?
        .ok_or_else(|| not_found(item_id))
}

/// Overwrites every mutable field of an existing item.
///
/// Lookup and update share one database transaction.
///
/// # Errors
/// Returns `Error::NotFound` if no item has this id.
#[instrument(skip(db))]
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    payload: ItemPayload,
) -> Result<item::Model> {
    let txn = db.begin().await?;

    let mut item: item::ActiveModel = Item::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or_else(|| not_found(item_id))?
        .into();

    item.name = Set(payload.name);
    item.description = Set(payload.description);
    item.price = Set(payload.price);
    item.tax = Set(payload.tax);

    let updated = item.update(&txn).await?;
    txn.commit().await?;

    info!(item_id, "Updated item");
    Ok(updated)
}

/// Deletes an item.
///
/// # Errors
/// Returns `Error::NotFound` if no item has this id.
#[instrument(skip(db))]
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let result = Item::delete_by_id(item_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(item_id));
    }

    info!(item_id, "Deleted item");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_item_assigns_fresh_ids() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_item(&db, item_payload("pen", 1.5)).await?;
        let second = create_item(&db, item_payload("ink", 2.0)).await?;

        assert_eq!(first.name, "pen");
        assert_eq!(first.price, 1.5);
        assert!(first.description.is_none());
        assert!(first.tax.is_none());
        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_item_roundtrip() -> Result<()> {
        let db = setup_test_db().await?;
        let payload = ItemPayload {
            name: "notebook".to_string(),
            description: Some("A5 ruled".to_string()),
            price: 4.25,
            tax: Some(0.3),
        };

        let created = create_item(&db, payload).await?;
        let fetched = get_item(&db, created.id).await?;

        assert_eq!(created, fetched);
        assert_eq!(fetched.description.as_deref(), Some("A5 ruled"));
        assert_eq!(fetched.tax, Some(0.3));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_item(&db, 42).await;
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "Item",
                id: 42
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_replaces_all_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_item(
            &db,
            ItemPayload {
                name: "pen".to_string(),
                description: Some("blue".to_string()),
                price: 1.5,
                tax: Some(0.1),
            },
        )
        .await?;

        let updated = update_item(&db, created.id, item_payload("pencil", 0.5)).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "pencil");
        assert_eq!(updated.price, 0.5);
        // Full replacement: fields absent from the payload are cleared, not merged
        assert!(updated.description.is_none());
        assert!(updated.tax.is_none());

        let fetched = get_item(&db, created.id).await?;
        assert_eq!(fetched, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_item(&db, 7, item_payload("ghost", 1.0)).await;
        assert!(matches!(result, Err(Error::NotFound { id: 7, .. })));
        assert!(list_items(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_item(&db, item_payload("pen", 1.5)).await?;

        delete_item(&db, created.id).await?;

        assert!(matches!(
            get_item(&db, created.id).await,
            Err(Error::NotFound { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_highest_id_is_not_reused() -> Result<()> {
        let db = setup_test_db().await?;
        create_item(&db, item_payload("a", 1.0)).await?;
        let newest = create_item(&db, item_payload("b", 2.0)).await?;

        delete_item(&db, newest.id).await?;
        let next = create_item(&db, item_payload("c", 3.0)).await?;

        assert!(next.id > newest.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_item(&db, 3).await;
        assert!(matches!(result, Err(Error::NotFound { id: 3, .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_tracks_creates_and_deletes() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(list_items(&db).await?.is_empty());

        let a = create_item(&db, item_payload("a", 1.0)).await?;
        let b = create_item(&db, item_payload("b", 2.0)).await?;
        let c = create_item(&db, item_payload("c", 3.0)).await?;
        delete_item(&db, b.id).await?;

        let items = list_items(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, a.id);
        assert_eq!(items[1].id, c.id);

        Ok(())
    }
}

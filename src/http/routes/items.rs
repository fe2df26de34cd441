//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::core::item;
use crate::errors::Result;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::state::AppState;
use crate::models::{Item, ItemList, ItemPayload, Message};

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<ItemPayload>,
) -> Result<(StatusCode, Json<Item>)> {
    let created = item::create_item(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(Item::from(created))))
}

/// GET /items - list all items (unpaged)
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<ItemList>> {
    let items = item::list_items(&state.db).await?;
    Ok(Json(ItemList::unpaged(
        items.into_iter().map(Item::from).collect(),
    )))
}

/// GET /items/{item_id}
async fn get_item(
    State(state): State<Arc<AppState>>,
    RecordId(item_id): RecordId,
) -> Result<Json<Item>> {
    let found = item::get_item(&state.db, item_id).await?;
    Ok(Json(Item::from(found)))
}

/// PUT /items/{item_id} - replace every field of an item
async fn update_item(
    State(state): State<Arc<AppState>>,
    RecordId(item_id): RecordId,
    ValidJson(payload): ValidJson<ItemPayload>,
) -> Result<Json<Item>> {
    let updated = item::update_item(&state.db, item_id, payload).await?;
    Ok(Json(Item::from(updated)))
}

/// DELETE /items/{item_id}
async fn delete_item(
    State(state): State<Arc<AppState>>,
    RecordId(item_id): RecordId,
) -> Result<Json<Message>> {
    item::delete_item(&state.db, item_id).await?;
    Ok(Json(Message::new("delete success")))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

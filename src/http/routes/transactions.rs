//! Transaction endpoints. Paths are singular, and the create path keeps its trailing slash.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::core::transaction;
use crate::errors::Result;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::state::AppState;
use crate::models::{Transaction, TransactionPayload};

/// POST /transaction/
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<TransactionPayload>,
) -> Result<(StatusCode, Json<Transaction>)> {
    let created = transaction::create_transaction(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(Transaction::from(created))))
}

/// GET /transaction/{transaction_id}
async fn get_transaction(
    State(state): State<Arc<AppState>>,
    RecordId(transaction_id): RecordId,
) -> Result<Json<Transaction>> {
    let found = transaction::get_transaction(&state.db, transaction_id).await?;
    Ok(Json(Transaction::from(found)))
}

/// Transaction routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transaction/", post(create_transaction))
        .route("/transaction/{transaction_id}", get(get_transaction))
}

//! Wallet endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::core::wallet;
use crate::errors::Result;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::state::AppState;
use crate::models::{Wallet, WalletPayload};

/// POST /wallets
async fn create_wallet(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<WalletPayload>,
) -> Result<(StatusCode, Json<Wallet>)> {
    let created = wallet::create_wallet(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(Wallet::from(created))))
}

/// GET /wallets/{wallet_id}
async fn get_wallet(
    State(state): State<Arc<AppState>>,
    RecordId(wallet_id): RecordId,
) -> Result<Json<Wallet>> {
    let found = wallet::get_wallet(&state.db, wallet_id).await?;
    Ok(Json(Wallet::from(found)))
}

/// Wallet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wallets", post(create_wallet))
        .route("/wallets/{wallet_id}", get(get_wallet))
}

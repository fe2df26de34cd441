//! Merchant endpoints. Paths are singular, and the create path keeps its trailing slash.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::core::merchant;
use crate::errors::Result;
use crate::http::extractors::{RecordId, ValidJson};
use crate::http::state::AppState;
use crate::models::{Merchant, MerchantPayload};

/// POST /merchant/
async fn create_merchant(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<MerchantPayload>,
) -> Result<(StatusCode, Json<Merchant>)> {
    let created = merchant::create_merchant(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(Merchant::from(created))))
}

/// GET /merchant/{merchant_id}
async fn get_merchant(
    State(state): State<Arc<AppState>>,
    RecordId(merchant_id): RecordId,
) -> Result<Json<Merchant>> {
    let found = merchant::get_merchant(&state.db, merchant_id).await?;
    Ok(Json(Merchant::from(found)))
}

/// Merchant routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/merchant/", post(create_merchant))
        .route("/merchant/{merchant_id}", get(get_merchant))
}

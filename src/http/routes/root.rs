//! Greeting and health endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::models::Message;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// GET /
async fn hello() -> Json<Message> {
    Json(Message::new("Hello World"))
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Greeting and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
}

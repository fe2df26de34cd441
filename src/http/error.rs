//! HTTP mapping for [`crate::errors::Error`].
//!
//! Errors are converted to JSON responses of the form
//! `{"detail": <text>, "error": <kind>}` with a matching status code.
//! `detail` carries the client-facing message, e.g. `"Item not found"`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::Error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            Self::NotFound { entity, .. } => {
                (StatusCode::NOT_FOUND, "not_found", format!("{entity} not found"))
            }
            Self::Conflict { .. } => (StatusCode::CONFLICT, "conflict", self.to_string()),
            Self::Validation { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message.clone(),
            ),
            Self::Database(_) | Self::Config { .. } | Self::Io(_) | Self::AddrParse(_) => {
                // Log the actual error, return generic message
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "detail": message,
            "error": kind,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use sea_orm::DbErr;
    use serde_json::Value;

    async fn body_of(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_body_carries_detail() {
        let response = Error::NotFound {
            entity: "Item",
            id: 5,
        }
        .into_response();
        let body = body_of(response).await;
        assert_eq!(body["detail"], "Item not found");
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn validation_body_carries_detail() {
        let response = Error::Validation {
            message: "missing field `id`".to_string(),
        }
        .into_response();
        let body = body_of(response).await;
        assert_eq!(body["detail"], "missing field `id`");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = Error::NotFound {
            entity: "Wallet",
            id: 4,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = Error::Conflict {
            entity: "Merchant",
            id: 1,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = Error::Validation {
            message: "missing field `name`".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn database_maps_to_500() {
        let response = Error::Database(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Custom Axum extractors
//!
//! Both wrap an Axum built-in and turn its rejection into
//! [`Error::Validation`] so malformed input gets the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::errors::Error;

/// JSON body deserialized into `T`; type or missing-field errors become 422.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Integer record id from the single path parameter.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::Validation {
                message: rejection.body_text(),
            })?;
        Ok(Self(id))
    }
}

//! Request extractors that report rejections as [`ApiError`].
//!
//! axum's own `Json` and `Query` reject with 4xx responses in their own
//! format. The API reports every non-404 failure as a 500 with a `detail`
//! message, so handlers use these wrappers instead.

use std::str::FromStr;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body; malformed or ill-typed bodies become `ApiError::Internal`.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&body)
            .map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string parameters; missing or ill-typed parameters become
/// `ApiError::Internal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Internal(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Parse a path id.
///
/// A malformed id cannot name a stored entity, so it is reported with the
/// same 404 as a well-formed id that matches nothing.
pub fn parse_id<T: FromStr>(raw: &str, not_found: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(not_found.to_string()))
}

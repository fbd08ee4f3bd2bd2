use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// Undecoded request body, for handlers that must validate the path first.
#[derive(Debug)]
pub struct RawBody(pub Bytes);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        Bytes::from_request(req, state)
            .await
            .map(RawBody)
            .map_err(|e| AppError::InternalError(e.body_text()))
    }
}

/// JSON request body whose decode failures surface as internal errors.
///
/// The body is decoded whatever the request's `Content-Type` says.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let RawBody(bytes) = <RawBody as FromRequest<S>>::from_request(req, state).await?;

        decode_json(&bytes).map(JsonBody)
    }
}

pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| AppError::InternalError(e.to_string()))
}

/// Parses a product id path segment.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

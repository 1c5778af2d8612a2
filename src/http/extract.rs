//! Extractors that answer rejections with the JSON error envelope.
//!
//! axum's stock `Path`/`Json` reject with plain-text bodies; these wrappers
//! keep every error response in the `{"msg": ...}` shape.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Typed path parameters. A segment that does not parse (e.g. a
/// non-integer id) means the resource cannot exist, so it answers 404.
#[derive(Debug, Clone, Copy)]
pub struct PathIds<T>(pub T);

impl<S, T> FromRequestParts<S> for PathIds<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathIds(value)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), reason = %rejection.body_text(), "Unparseable path parameter");
                Err(ApiError::not_found("Resource not found"))
            }
        }
    }
}

/// JSON request body. Malformed bodies answer 400, oversized ones 413.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ApiError::PayloadTooLarge)
            }
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

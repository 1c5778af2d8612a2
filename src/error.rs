//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::Message;

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A referenced row (or route) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The row being created already exists.
    #[error("{0}")]
    Conflict(String),

    /// The request body is missing or lacks a required field.
    #[error("{0}")]
    BadRequest(String),

    /// The route exists but does not answer this method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body exceeds `security.max_body_size`.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The request did not complete within `timeouts.request_secs`.
    #[error("Request timed out")]
    Timeout,

    /// Any failure reported by the database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for handlers and the services behind them.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        ApiError::Conflict(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
                "Internal server error".to_string()
            }
            ApiError::NotFound(msg) | ApiError::Conflict(msg) | ApiError::BadRequest(msg) => msg,
            other => other.to_string(),
        };
        (status, Json(Message::new(msg))).into_response()
    }
}

/// True when the database rejected a write because of a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::Timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_database_error_is_not_echoed() {
        let response = ApiError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["msg"], "Internal server error");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("Planet not found");
        assert_eq!(err.to_string(), "Planet not found");
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}

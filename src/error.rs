//! Error types for the message board
//!
//! Provides unified error handling using thiserror. Every error body sent to
//! a client is plain text.

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Body sent for any failure the server did not anticipate.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

/// The handler that was looking up a message when it turned out to be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Get,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Get => write!(f, "get"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

// == Store Error Enum ==
/// Failures reported by a message store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// == Api Error Enum ==
/// Unified error type for the HTTP surface.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field was missing or the body could not be parsed
    #[error("{0}")]
    Validation(String),

    /// The targeted message does not exist
    #[error("message {id} not found ({action})")]
    NotFound { id: String, action: Action },

    /// Anything else; details stay in the server log
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    /// Builds a not-found error for the given handler.
    pub fn not_found(id: impl Into<String>, action: Action) -> Self {
        ApiError::NotFound {
            id: id.into(),
            action,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Unexpected(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound { id, action } => match action {
                Action::Get => (
                    StatusCode::NOT_FOUND,
                    format!("the message with id={} not found", id),
                ),
                Action::Update | Action::Delete => (
                    StatusCode::BAD_REQUEST,
                    format!(
                        "couldn't {} a message with id={}. message not found",
                        action, id
                    ),
                ),
            },
            ApiError::Unexpected(err) => {
                error!("Unhandled error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, message).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_not_found_is_404() {
        let response = ApiError::not_found("abc", Action::Get).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "the message with id=abc not found");
    }

    #[tokio::test]
    async fn test_update_not_found_is_400() {
        let response = ApiError::not_found("abc", Action::Update).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "couldn't update a message with id=abc. message not found"
        );
    }

    #[tokio::test]
    async fn test_delete_not_found_is_400() {
        let response = ApiError::not_found("abc", Action::Delete).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "couldn't delete a message with id=abc. message not found"
        );
    }

    #[tokio::test]
    async fn test_unexpected_hides_details() {
        let err = ApiError::from(StoreError::Io(std::io::Error::other("disk on fire")));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, GENERIC_FAILURE);
    }
}

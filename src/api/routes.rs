//! API Routes
//!
//! Configures the Axum router with all message board endpoints.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{
    create_message, delete_message, get_message, health_handler, list_messages, update_message,
    AppState,
};
use crate::error::GENERIC_FAILURE;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /messages` - Create a message
/// - `GET /messages` - List all messages
/// - `GET /messages/:id` - Fetch one message
/// - `PUT /messages/:id` - Update a message
/// - `DELETE /messages/:id` - Delete a message
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Panic catcher: logs and answers 500 with a generic body
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/:id",
            get(get_message).put(update_message).delete(delete_message),
        )
        .route("/health", get(health_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use crate::store::{InMemoryStore, MessageStore, StoreResult};
    use axum::{body::Body, http::Request};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(InMemoryStore::new()))
    }

    /// Store that panics on lookup.
    struct PanickingStore;

    impl MessageStore for PanickingStore {
        fn get(&self, _id: &str) -> StoreResult<Option<Message>> {
            panic!("lookup exploded")
        }
        fn insert(&mut self, _id: String, _message: Message) -> StoreResult<Option<Message>> {
            Ok(None)
        }
        fn values(&self) -> StoreResult<Vec<Message>> {
            Ok(Vec::new())
        }
        fn remove(&mut self, _id: &str) -> StoreResult<Option<Message>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/messages")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"Hello","body":"World"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/messages/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_panic_becomes_500() {
        let app = create_router(AppState::new(PanickingStore));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/messages/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], GENERIC_FAILURE.as_bytes());
    }
}

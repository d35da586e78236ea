//! API Handlers
//!
//! HTTP request handlers for each message board endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{FromRequest, Path, State},
    Json,
};
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{Action, ApiError, Result};
use crate::models::{CreateMessageRequest, HealthResponse, Message, UpdateMessageRequest};
use crate::store::{FileStore, InMemoryStore, MessageStore};

/// Shared store handle.
pub type SharedStore = Arc<RwLock<Box<dyn MessageStore>>>;

/// Application state shared across all handlers.
///
/// Contains the message store wrapped in Arc<RwLock<>> for thread-safe access
/// and the clock used to stamp records.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new AppState with the given store and the system clock.
    pub fn new(store: impl MessageStore + 'static) -> Self {
        Self::with_clock(store, SystemClock::new())
    }

    /// Creates a new AppState with an explicit clock.
    pub fn with_clock(store: impl MessageStore + 'static, clock: impl Clock + 'static) -> Self {
        let store: Box<dyn MessageStore> = Box::new(store);
        Self {
            store: Arc::new(RwLock::new(store)),
            clock: Arc::new(clock),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses a [`FileStore`] when a messages file is configured, otherwise an
    /// empty [`InMemoryStore`].
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match &config.messages_file {
            Some(path) => {
                let store = FileStore::open(path)?;
                info!("Using file store at {}", path.display());
                Ok(Self::new(store))
            }
            None => {
                info!("Using in-memory store");
                Ok(Self::new(InMemoryStore::new()))
            }
        }
    }
}

/// JSON body extractor whose rejections become plain-text 400s.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl AppState {
    /// Runs `f` against the store on the blocking pool under the read lock.
    pub async fn read_store<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&(dyn MessageStore + 'static)) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let guard = store.blocking_read();
            f(&**guard)
        })
        .await
        .map_err(|err| ApiError::Unexpected(err.into()))?
    }

    /// Runs `f` against the store on the blocking pool under the write lock.
    ///
    /// Backends may do file I/O here, so it stays off the async workers.
    pub async fn write_store<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut (dyn MessageStore + 'static)) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = store.blocking_write();
            f(&mut **guard)
        })
        .await
        .map_err(|err| ApiError::Unexpected(err.into()))?
    }
}

/// Handler for POST /messages
///
/// Validates the request, assigns an id and `createdAt`, stores the message.
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateMessageRequest>,
) -> Result<Json<Message>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }
    let Some((title, body, attachment_url)) = req.into_fields() else {
        return Err(ApiError::Validation("Title and Body are required".to_string()));
    };
    let message = Message::new(title, body, attachment_url, state.clock.now());

    let stored = message.clone();
    state
        .write_store(move |store| {
            store.insert(stored.id.clone(), stored)?;
            Ok(())
        })
        .await?;
    info!(id = %message.id, "message created");

    Ok(Json(message))
}

/// Handler for GET /messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>> {
    let messages = state.read_store(|store| Ok(store.values()?)).await?;
    Ok(Json(messages))
}

/// Handler for GET /messages/:id
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    state
        .read_store(move |store| match store.get(&id)? {
            Some(message) => Ok(Json(message)),
            None => Err(ApiError::not_found(id, Action::Get)),
        })
        .await
}

/// Handler for PUT /messages/:id
///
/// Merges the whitelisted fields over the stored record. The write lock is
/// held from lookup to insert. A missing id is reported before any problem
/// with the body.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<JsonBody<UpdateMessageRequest>, ApiError>,
) -> Result<Json<Message>> {
    let clock = state.clock.clone();
    let message = state
        .write_store(move |store| {
            let Some(mut message) = store.get(&id)? else {
                return Err(ApiError::not_found(id, Action::Update));
            };
            let JsonBody(req) = body?;

            message.apply(req, clock.now());
            store.insert(message.id.clone(), message.clone())?;
            Ok(message)
        })
        .await?;
    info!(id = %message.id, "message updated");

    Ok(Json(message))
}

/// Handler for DELETE /messages/:id
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>> {
    let message = state
        .write_store(move |store| match store.remove(&id)? {
            Some(message) => Ok(message),
            None => Err(ApiError::not_found(id, Action::Delete)),
        })
        .await?;
    info!(id = %message.id, "message deleted");

    Ok(Json(message))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.clock.now()))
}

//! Store Module
//!
//! Message storage keyed by id. Handlers only see the [`MessageStore`] trait;
//! the backend is picked at startup.

mod file;
mod memory;


pub use file::FileStore;
pub use memory::InMemoryStore;

use crate::error::StoreError;
use crate::models::Message;

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Key-value contract over messages.
///
/// A missing key is `Ok(None)`, never an error. `Err` is reserved for
/// backend failures.
pub trait MessageStore: Send + Sync {
    /// Point lookup.
    fn get(&self, id: &str) -> StoreResult<Option<Message>>;

    /// Inserts or overwrites the record at `id`, returning the previous one.
    fn insert(&mut self, id: String, message: Message) -> StoreResult<Option<Message>>;

    /// All stored records. Callers must not rely on the order.
    fn values(&self) -> StoreResult<Vec<Message>>;

    /// Deletes the record at `id`, returning it.
    fn remove(&mut self, id: &str) -> StoreResult<Option<Message>>;

    /// Number of stored records.
    fn len(&self) -> StoreResult<usize> {
        self.values().map(|values| values.len())
    }

    fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|len| len == 0)
    }
}

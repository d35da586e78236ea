//! In-memory message store backed by a key-ordered map.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::Message;
use crate::store::{MessageStore, StoreResult};

// == In-Memory Store ==
/// Process-local store. Contents live as long as the value does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    messages: BTreeMap<String, Message>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `messages`, keyed by their ids.
    pub fn from_messages(messages: impl IntoIterator<Item = Message>) -> Self {
        Self {
            messages: messages
                .into_iter()
                .map(|message| (message.id.clone(), message))
                .collect(),
        }
    }

    /// Iterates stored records in id order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.values()
    }
}

impl MessageStore for InMemoryStore {
    fn get(&self, id: &str) -> StoreResult<Option<Message>> {
        Ok(self.messages.get(id).cloned())
    }

    fn insert(&mut self, id: String, message: Message) -> StoreResult<Option<Message>> {
        debug!(%id, "inserting message");
        Ok(self.messages.insert(id, message))
    }

    fn values(&self) -> StoreResult<Vec<Message>> {
        Ok(self.messages.values().cloned().collect())
    }

    fn remove(&mut self, id: &str) -> StoreResult<Option<Message>> {
        debug!(%id, "removing message");
        Ok(self.messages.remove(id))
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.messages.len())
    }
}

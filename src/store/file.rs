//! File-backed message store
//!
//! Keeps an [`InMemoryStore`] and rewrites a JSON snapshot of it after every
//! mutation, so messages survive a restart.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::Message;
use crate::store::{InMemoryStore, MessageStore, StoreResult};

// == File Store ==
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl FileStore {
    /// Opens the snapshot at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let inner = match fs::read(&path) {
            Ok(bytes) => {
                let messages: Vec<Message> = serde_json::from_slice(&bytes)?;
                info!(
                    "Loaded {} messages from {}",
                    messages.len(),
                    path.display()
                );
                InMemoryStore::from_messages(messages)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("No snapshot at {}, starting empty", path.display());
                InMemoryStore::new()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, inner })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `map` to a sibling temp file, then renames it over the
    /// snapshot.
    fn persist(&self, map: &InMemoryStore) -> StoreResult<()> {
        let messages: Vec<&Message> = map.iter().collect();
        let bytes = serde_json::to_vec(&messages)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = fs::File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        debug!(count = messages.len(), path = %self.path.display(), "snapshot written");
        Ok(())
    }
}

impl MessageStore for FileStore {
    fn get(&self, id: &str) -> StoreResult<Option<Message>> {
        self.inner.get(id)
    }

    // Mutations go to a copy; it replaces `inner` only once it is on disk.
    fn insert(&mut self, id: String, message: Message) -> StoreResult<Option<Message>> {
        let mut next = self.inner.clone();
        let previous = next.insert(id, message)?;
        self.persist(&next)?;
        self.inner = next;
        Ok(previous)
    }

    fn values(&self) -> StoreResult<Vec<Message>> {
        self.inner.values()
    }

    fn remove(&mut self, id: &str) -> StoreResult<Option<Message>> {
        if self.inner.get(id)?.is_none() {
            return Ok(None);
        }
        let mut next = self.inner.clone();
        let removed = next.remove(id)?;
        self.persist(&next)?;
        self.inner = next;
        Ok(removed)
    }

    fn len(&self) -> StoreResult<usize> {
        self.inner.len()
    }
}

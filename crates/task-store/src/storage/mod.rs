//! Storage Layer
//!
//! Two levels: [`KeyValueStore`] is a dumb string-slot store shaped like
//! the Web Storage API, and [`TaskStorage`] is the JSON codec that reads
//! and writes the whole task collection under one key. Backends know
//! nothing about tasks.

mod memory;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::domain::{DomainResult, Task};

pub use memory::MemoryStore;

/// String key-value slots (`localStorage` or an in-memory fake)
pub trait KeyValueStore {
    /// Read a slot; `None` when the key was never written
    fn get_item(&self, key: &str) -> Option<String>;

    /// Replace a slot's value
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove a slot; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> DomainResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<K> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        (**self).remove_item(key)
    }
}

/// Whole-collection load/save of tasks under a single key
#[derive(Debug, Clone)]
pub struct TaskStorage<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> TaskStorage<K> {
    pub fn new(backend: K, config: &StoreConfig) -> Self {
        Self {
            backend,
            key: config.storage_key.clone(),
        }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Read the persisted collection.
    ///
    /// Never fails: a missing slot, `null`, or anything that does not
    /// parse as a task array all read back as an empty collection.
    pub fn load(&self) -> Vec<Task> {
        match self.backend.get_item(&self.key) {
            Some(raw) => decode_collection(&raw),
            None => Vec::new(),
        }
    }

    /// Serialize and write the full collection, replacing the old value
    pub fn save(&self, tasks: &[Task]) -> DomainResult<()> {
        let raw = encode_collection(tasks);
        self.backend.set_item(&self.key, &raw)?;
        debug!(key = %self.key, count = tasks.len(), "saved task collection");
        Ok(())
    }

    /// Drop the slot entirely
    pub fn clear(&self) -> DomainResult<()> {
        self.backend.remove_item(&self.key)
    }
}

/// Parse a stored blob into a collection with unique ids.
///
/// Later records that repeat an earlier id are discarded.
pub fn decode_collection(raw: &str) -> Vec<Task> {
    let parsed: Option<Vec<Task>> = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(error = %e, "stored task collection is corrupt, treating as empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = parsed.unwrap_or_default();
    tasks.retain(|task| {
        let fresh = seen.insert(task.id);
        if !fresh {
            warn!(id = task.id, "dropping task with duplicate id");
        }
        fresh
    });
    tasks
}

pub fn encode_collection(tasks: &[Task]) -> String {
    // A Vec of plain structs with String fields cannot fail to serialize.
    serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string())
}

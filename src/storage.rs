//! Browser Storage
//!
//! `localStorage` behind the [`KeyValueStore`] trait, and the repository
//! the whole app shares.

use task_store::{Clock, DomainError, DomainResult, KeyValueStore, MemoryStore, StoreConfig, TaskStorage, TaskStore};
use tracing::warn;

/// The repository type every view goes through
pub type BoardRepository = TaskStore<BrowserStorage, BrowserClock>;

/// `window.localStorage`, or process memory when the browser refuses it
/// (private mode, storage disabled)
#[derive(Debug, Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match local {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                warn!("localStorage unavailable, tasks will not survive a reload");
                BrowserStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(|e| {
                warn!(key, error = ?e, "localStorage rejected write");
                DomainError::Storage(format!("{:?}", e))
            }),
            BrowserStorage::Memory(memory) => memory.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| DomainError::Storage(format!("{:?}", e))),
            BrowserStorage::Memory(memory) => memory.remove_item(key),
        }
    }
}

/// `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Build the app's repository over the default storage slot
pub fn open_repository() -> BoardRepository {
    let storage = TaskStorage::new(BrowserStorage::open(), &StoreConfig::default());
    TaskStore::new(storage, BrowserClock)
}

//! In-memory key-value store
//!
//! Stands in for `localStorage` in tests and when the browser refuses
//! access to it. Clones share the same slots.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::{DomainError, DomainResult};

use super::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, like a full or disabled storage
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.read_only.get() {
            return Err(DomainError::Storage("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

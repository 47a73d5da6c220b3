//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds what
//! the board displays; the repository remains the source of truth.

use leptos::prelude::*;
use reactive_stores::Store;
use task_store::{Task, TaskId};

/// Displayed board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
}

impl AppState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().push(task);
}

/// Replace a task in place by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    if let Some(task) = store.tasks().write().iter_mut().find(|t| t.id == updated.id) {
        *task = updated;
    }
}

pub fn store_remove_task(store: &AppStore, task_id: TaskId) {
    store.tasks().write().retain(|task| task.id != task_id);
}

pub fn store_clear_tasks(store: &AppStore) {
    store.tasks().write().clear();
}

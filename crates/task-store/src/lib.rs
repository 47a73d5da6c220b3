//! Task Store
//!
//! Platform-independent core of the task board: the task record, the
//! storage slot it is persisted to, and the repository every view goes
//! through. Nothing here touches the browser; the frontend supplies a
//! [`KeyValueStore`] backed by `localStorage` and a [`Clock`] backed by
//! `Date.now()`.

pub mod config;
pub mod domain;
pub mod repository;
pub mod storage;

pub use config::StoreConfig;
pub use domain::{DomainError, DomainResult, Entity, Task, TaskId, MAX_TASK_ID};
pub use repository::{Clock, ManualClock, Repository, TaskRepository, TaskStore};
pub use storage::{KeyValueStore, MemoryStore, TaskStorage};

//! Task Store
//!
//! Cached task collection over a [`TaskStorage`] slot. The cache is only
//! replaced after storage accepted the write, so memory never runs ahead
//! of what a reload would see.

use std::cell::RefCell;

use tracing::{debug, info};

use crate::domain::{DomainError, DomainResult, Task, TaskId, MAX_TASK_ID};
use crate::storage::{KeyValueStore, TaskStorage};

use super::clock::Clock;
use super::traits::{Repository, TaskRepository};

pub struct TaskStore<K, C> {
    storage: TaskStorage<K>,
    clock: C,
    cache: RefCell<Option<Vec<Task>>>,
}

impl<K: KeyValueStore, C: Clock> TaskStore<K, C> {
    pub fn new(storage: TaskStorage<K>, clock: C) -> Self {
        Self {
            storage,
            clock,
            cache: RefCell::new(None),
        }
    }

    /// Forget the cached collection; the next call re-reads storage
    pub fn reload(&self) {
        self.cache.replace(None);
    }

    /// Remove every task
    pub fn clear(&self) -> DomainResult<()> {
        self.storage.clear()?;
        self.cache.replace(Some(Vec::new()));
        info!("cleared all tasks");
        Ok(())
    }

    fn snapshot(&self) -> Vec<Task> {
        let mut cache = self.cache.borrow_mut();
        cache.get_or_insert_with(|| self.storage.load()).clone()
    }

    fn commit(&self, tasks: Vec<Task>) -> DomainResult<()> {
        self.storage.save(&tasks)?;
        self.cache.replace(Some(tasks));
        Ok(())
    }

    /// Timestamp-derived, but always above every id already in use.
    ///
    /// Fails once the next id would leave JavaScript's safe integer range.
    fn next_id(&self, tasks: &[Task]) -> DomainResult<TaskId> {
        let floor = match tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };
        match floor.map(|floor| self.clock.now_millis().max(floor)) {
            Some(id) if id <= MAX_TASK_ID => Ok(id),
            _ => Err(DomainError::Storage("no task ids left".to_string())),
        }
    }
}

impl<K: KeyValueStore, C: Clock> Repository<Task> for TaskStore<K, C> {
    fn list(&self) -> Vec<Task> {
        self.snapshot()
    }

    fn find_by_id(&self, id: TaskId) -> DomainResult<Task> {
        self.snapshot()
            .into_iter()
            .find(|task| task.id == id)
            .ok_or(DomainError::NotFound(id))
    }

    fn delete(&self, id: TaskId) -> DomainResult<()> {
        let mut tasks = self.snapshot();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            debug!(id, "delete of missing task ignored");
            return Ok(());
        }
        self.commit(tasks)?;
        info!(id, "deleted task");
        Ok(())
    }
}

impl<K: KeyValueStore, C: Clock> TaskRepository for TaskStore<K, C> {
    fn create(&self, title: &str) -> DomainResult<Task> {
        let mut tasks = self.snapshot();
        let task = Task::new(self.next_id(&tasks)?, title)?;
        tasks.push(task.clone());
        self.commit(tasks)?;
        info!(id = task.id, "created task");
        Ok(task)
    }

    fn update(&self, id: TaskId, title: &str, description: &str) -> DomainResult<Task> {
        let mut tasks = self.snapshot();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(DomainError::NotFound(id))?;
        task.title = title.to_string();
        task.description = description.to_string();
        let updated = task.clone();
        self.commit(tasks)?;
        info!(id, "updated task");
        Ok(updated)
    }
}

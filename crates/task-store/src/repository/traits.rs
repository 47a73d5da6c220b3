//! Repository Layer - Core Traits
//!
//! Abstract interfaces for task access. Everything is synchronous: each
//! call runs to completion against storage before it returns.

use crate::domain::{DomainResult, Entity, Task, TaskId};

/// Read and delete operations common to any entity collection
pub trait Repository<T: Entity> {
    /// All entities in insertion order
    fn list(&self) -> Vec<T>;

    /// Find entity by ID, `NotFound` when absent
    fn find_by_id(&self, id: T::Id) -> DomainResult<T>;

    /// Delete entity by ID. Deleting a missing ID succeeds and changes nothing.
    fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Task-specific writes on top of [`Repository`]
pub trait TaskRepository: Repository<Task> {
    /// Append a new task with a fresh id, trimmed title and empty description
    fn create(&self, title: &str) -> DomainResult<Task>;

    /// Replace title and description, keeping id and position
    fn update(&self, id: TaskId, title: &str, description: &str) -> DomainResult<Task>;
}

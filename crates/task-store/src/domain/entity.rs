//! Domain Layer - Core Entity Trait
//!
//! Basic contract for persisted records and the errors repository
//! operations can report.

use thiserror::Error;

use super::task::TaskId;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// A corrupt storage slot is deliberately absent: it is read back as an
/// empty collection and only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input rejected before anything was written (e.g. a blank title)
    #[error("Invalid input: {0}")]
    Validation(String),
    /// No task with this id exists in the collection
    #[error("Task #{0} not found")]
    NotFound(TaskId),
    /// The storage backend refused the write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

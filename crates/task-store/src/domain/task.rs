//! Task Entity
//!
//! One to-do item on the board. Serialized as
//! `{"id": number, "title": string, "description": string}`.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Task identifier. Millisecond-timestamp sized, so it stays a safe
/// integer when read back by JavaScript.
pub type TaskId = u64;

/// Largest id that survives a round trip through a JavaScript number
pub const MAX_TASK_ID: TaskId = (1 << 53) - 1;

/// A task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,
    /// Short title shown on the board
    pub title: String,
    /// Free-form notes (Markdown), empty by default
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Create a task from quick-add input.
    ///
    /// The title is trimmed; a blank title is rejected.
    pub fn new(id: TaskId, title: &str) -> DomainResult<Self> {
        let title = Self::normalize_title(title)?;
        Ok(Self {
            id,
            title,
            description: String::new(),
        })
    }

    /// Trim a quick-add title, rejecting it when nothing is left
    pub fn normalize_title(raw: &str) -> DomainResult<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("task title cannot be empty".to_string()));
        }
        Ok(trimmed.to_string())
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

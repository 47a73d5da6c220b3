//! Task Detail State
//!
//! Loading → Ready → Saving → Saved, or NotFound when the id does not
//! resolve. Fields are only reachable in states that hold a draft, so the
//! view cannot read a task that does not exist.

use task_store::{DomainError, DomainResult, Task};

/// Editable copy of a task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    /// Message from the last failed save
    pub error: Option<String>,
}

impl From<Task> for Draft {
    fn from(task: Task) -> Self {
        Self {
            title: task.title,
            description: task.description,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready(Draft),
    Saving(Draft),
    Saved,
    NotFound,
}

/// Which block of markup the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Editor,
    Missing,
}

impl DetailState {
    /// Result of looking the task up on mount
    pub fn loaded(result: DomainResult<Task>) -> Self {
        match result {
            Ok(task) => DetailState::Ready(task.into()),
            Err(e) => {
                tracing::debug!(error = %e, "task detail unavailable");
                DetailState::NotFound
            }
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            DetailState::Loading => Screen::Loading,
            DetailState::Ready(_) | DetailState::Saving(_) | DetailState::Saved => Screen::Editor,
            DetailState::NotFound => Screen::Missing,
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            DetailState::Ready(draft) | DetailState::Saving(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        self.draft().map(|d| d.title.clone()).unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.draft().map(|d| d.description.clone()).unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.draft().and_then(|d| d.error.clone())
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, DetailState::Saving(_))
    }

    /// Edits only apply while Ready
    pub fn set_title(&mut self, title: String) {
        if let DetailState::Ready(draft) = self {
            draft.title = title;
        }
    }

    pub fn set_description(&mut self, description: String) {
        if let DetailState::Ready(draft) = self {
            draft.description = description;
        }
    }

    /// Ready → Saving, handing back the values to write
    pub fn begin_save(&mut self) -> Option<Draft> {
        let DetailState::Ready(draft) = self else {
            return None;
        };
        draft.error = None;
        let draft = draft.clone();
        *self = DetailState::Saving(draft.clone());
        Some(draft)
    }

    /// Saving → Saved on success, back to Ready with a message otherwise
    pub fn finish_save(&mut self, result: DomainResult<Task>) {
        let DetailState::Saving(draft) = self else {
            return;
        };
        match result {
            Ok(_) => *self = DetailState::Saved,
            Err(e) => {
                let mut draft = draft.clone();
                draft.error = Some(save_error_message(&e));
                *self = DetailState::Ready(draft);
            }
        }
    }
}

fn save_error_message(error: &DomainError) -> String {
    if error.is_not_found() {
        "This task no longer exists. Retry or go back to the board.".to_string()
    } else {
        format!("Could not save: {}", error)
    }
}

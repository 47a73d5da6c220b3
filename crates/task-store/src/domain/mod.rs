//! Domain Layer
//!
//! The task record and the error vocabulary shared by storage and
//! repository. Depends only on serde and thiserror.

mod entity;
mod task;

pub use entity::{DomainError, DomainResult, Entity};
pub use task::{Task, TaskId, MAX_TASK_ID};

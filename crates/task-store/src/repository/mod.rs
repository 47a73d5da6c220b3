//! Repository Layer
//!
//! The single path through which views read and change tasks.

mod clock;
mod task_store;
mod traits;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock};
pub use task_store::TaskStore;
pub use traits::{Repository, TaskRepository};

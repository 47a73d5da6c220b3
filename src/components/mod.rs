//! UI Components
//!
//! Leptos components for the board and detail pages.

mod board_view;
mod delete_confirm_button;
mod new_task_form;
mod page_not_found;
mod task_detail;
mod task_row;

pub use board_view::BoardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use new_task_form::NewTaskForm;
pub use page_not_found::PageNotFound;
pub use task_detail::TaskDetail;
pub use task_row::TaskRow;

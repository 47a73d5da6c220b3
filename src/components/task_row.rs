//! Task Row Component
//!
//! One task on the board: title linking to its detail page, plus delete.

use leptos::prelude::*;
use task_store::{Repository, Task};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{store_remove_task, use_app_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = task.id;
    let href = Route::TaskDetail(id).href();

    let delete = move |_: ()| match ctx.with_repo(|repo| repo.delete(id)) {
        Ok(()) => store_remove_task(&store, id),
        Err(e) => ctx.notify(format!("Could not delete task: {}", e)),
    };

    view! {
        <li class="task-row">
            <a class="task-title" href=href>{task.title}</a>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
        </li>
    }
}

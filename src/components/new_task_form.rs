//! New Task Form Component
//!
//! Quick-add input at the top of the board.

use leptos::prelude::*;
use task_store::{DomainError, TaskRepository};

use crate::context::use_app_context;
use crate::store::{store_add_task, use_app_store};

const EMPTY_TITLE_MESSAGE: &str = "Please enter a task";

/// Form for appending a task to the board
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            set_error.set(Some(EMPTY_TITLE_MESSAGE.to_string()));
            return;
        }

        match ctx.with_repo(|repo| repo.create(&text)) {
            Ok(task) => {
                store_add_task(&store, task);
                set_new_text.set(String::new());
                set_error.set(None);
            }
            Err(DomainError::Validation(_)) => set_error.set(Some(EMPTY_TITLE_MESSAGE.to_string())),
            Err(e) => set_error.set(Some(format!("Could not add task: {}", e))),
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Enter a task"
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        set_new_text.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                <button type="submit">"Add"</button>
            </div>
            {move || error.get().map(|message| view! {
                <p class="form-error" role="alert">{message}</p>
            })}
        </form>
    }
}

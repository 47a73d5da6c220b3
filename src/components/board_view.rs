//! Board View Component
//!
//! Quick-add form, the task list keyed by id, and a footer with the count.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, NewTaskForm, TaskRow};
use crate::context::use_app_context;
use crate::store::{store_clear_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let task_count = move || store.tasks().read().len();

    let clear_all = move |_: ()| match ctx.with_repo(|repo| repo.clear()) {
        Ok(()) => store_clear_tasks(&store),
        Err(e) => ctx.notify(format!("Could not clear tasks: {}", e)),
    };

    view! {
        <main class="board">
            <h1>"Task Board"</h1>

            {move || ctx.notice.get().map(|message| view! {
                <div class="notice" role="alert">
                    <span>{message}</span>
                    <button class="close-btn" on:click=move |_| ctx.clear_notice()>"×"</button>
                </div>
            })}

            <NewTaskForm />

            <Show
                when=move || { task_count() > 0 }
                fallback=|| view! { <p class="empty-board">"No tasks yet."</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || store.tasks().get()
                        key=|task| task.id
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>

            <footer class="board-footer">
                <span class="task-count">
                    {move || match task_count() {
                        1 => "1 task".to_string(),
                        n => format!("{} tasks", n),
                    }}
                </span>
                <Show when=move || { task_count() > 0 }>
                    <DeleteConfirmButton
                        button_class="clear-btn"
                        label="Clear all"
                        prompt="Delete every task?"
                        on_confirm=clear_all
                    />
                </Show>
            </footer>
        </main>
    }
}

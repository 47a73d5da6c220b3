//! Task Detail Component
//!
//! Edits one task's title and description. Rendering is driven by
//! [`DetailState`]; the editor only exists once the task was found.

use leptos::prelude::*;
use task_store::{Repository, TaskId, TaskRepository};

use crate::context::use_app_context;
use crate::detail::{DetailState, Screen};
use crate::markdown::render_markdown;
use crate::route::Route;
use crate::store::{store_update_task, use_app_store};

#[component]
pub fn TaskDetail(id: TaskId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = RwSignal::new(DetailState::Loading);

    // Look the task up once mounted
    Effect::new(move |_| {
        let found = ctx.with_repo(|repo| repo.find_by_id(id));
        state.set(DetailState::loaded(found));
    });

    // Only re-render the page body when the screen changes, not per keystroke
    let screen = Memo::new(move |_| state.with(|s| s.screen()));

    let save = move || {
        let Some(draft) = state.try_update(|s| s.begin_save()).flatten() else {
            return;
        };
        let result = ctx.with_repo(|repo| repo.update(id, &draft.title, &draft.description));
        if let Ok(task) = &result {
            store_update_task(&store, task.clone());
        }
        let saved = result.is_ok();
        state.update(|s| s.finish_save(result));
        if saved {
            ctx.navigate(Route::Board);
        }
    };

    let back = move |_: web_sys::MouseEvent| ctx.navigate(Route::Board);

    view! {
        <main class="task-detail">
            <h1>"Task Detail"</h1>
            {move || match screen.get() {
                Screen::Loading => view! { <p class="loading">"Loading…"</p> }.into_any(),
                Screen::Missing => view! {
                    <div class="not-found">
                        <p>{format!("Task #{} does not exist. It may have been deleted.", id)}</p>
                        <button type="button" on:click=back>"Back to Task List"</button>
                    </div>
                }.into_any(),
                Screen::Editor => view! {
                    <div class="detail-editor">
                        <form
                            class="detail-form"
                            on:submit=move |ev: web_sys::SubmitEvent| {
                                ev.prevent_default();
                                save();
                            }
                        >
                            <input
                                type="text"
                                placeholder="Title"
                                prop:value=move || state.with(|s| s.title())
                                prop:disabled=move || state.with(|s| s.is_saving())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_title(value));
                                }
                            />
                            <textarea
                                placeholder="Description (Markdown)"
                                rows=4
                                prop:value=move || state.with(|s| s.description())
                                prop:disabled=move || state.with(|s| s.is_saving())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_description(value));
                                }
                            ></textarea>
                            {move || state.with(|s| s.error()).map(|message| view! {
                                <p class="form-error" role="alert">{message}</p>
                            })}
                            <div class="detail-actions">
                                <button type="submit" class="save-btn">
                                    {move || if state.with(|s| s.error().is_some()) { "Retry" } else { "Save" }}
                                </button>
                                <button type="button" on:click=back>"Back to Task List"</button>
                            </div>
                        </form>
                        <section class="description-preview">
                            <div class="pane-header">"Preview"</div>
                            <div
                                class="markdown-body"
                                inner_html=move || render_markdown(&state.with(|s| s.description()))
                            ></div>
                        </section>
                    </div>
                }.into_any(),
            }}
        </main>
    }
}

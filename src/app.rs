//! Task Board App
//!
//! Root component: builds the shared repository, seeds the board store
//! from it once, and switches pages on the URL fragment.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use task_store::Repository;

use crate::components::{BoardView, PageNotFound, TaskDetail};
use crate::context::AppContext;
use crate::route::{current_route, Route};
use crate::storage::open_repository;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let repo = StoredValue::new_local(open_repository());
    let tasks = repo.with_value(|repo| repo.list());
    tracing::info!(count = tasks.len(), "loaded task board");

    // Provide state to all children
    provide_context(Store::new(AppState::new(tasks)));
    let ctx = AppContext::new(repo, signal(current_route()), signal(None));
    provide_context(ctx);

    // Links are plain `#/...` anchors; follow the fragment. The root lives as
    // long as the page, so the listener is never removed.
    let _hashchange = window_event_listener(ev::hashchange, move |_| ctx.sync_route(current_route()));

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Board => view! { <BoardView /> }.into_any(),
                Route::TaskDetail(id) => view! { <TaskDetail id=id /> }.into_any(),
                Route::NotFound(path) => view! { <PageNotFound path=path /> }.into_any(),
            }}
        </div>
    }
}

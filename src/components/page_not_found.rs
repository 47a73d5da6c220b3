//! Unknown route page

use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(path: String) -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <a href=Route::Board.href()>"Back to Task Board"</a>
        </main>
    }
}

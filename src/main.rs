//! Task Board Frontend Entry Point

mod app;
mod components;
mod context;
mod detail;
mod markdown;
mod route;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}

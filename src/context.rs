//! Application Context
//!
//! Shared handles provided via Leptos Context API: the one repository
//! every view goes through, the current route, and the board notice.

use leptos::prelude::*;

use crate::route::{self, Route};
use crate::storage::BoardRepository;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Built once at the root, never replaced
    repo: StoredValue<BoardRepository, LocalStorage>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Error shown above the board - read
    pub notice: ReadSignal<Option<String>>,
    /// Error shown above the board - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        repo: StoredValue<BoardRepository, LocalStorage>,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            repo,
            route: route.0,
            set_route: route.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Run a repository operation
    pub fn with_repo<U>(&self, f: impl FnOnce(&BoardRepository) -> U) -> U {
        self.repo.with_value(f)
    }

    /// Move to another page, updating the address bar
    pub fn navigate(&self, route: Route) {
        route::set_location(&route);
        self.sync_route(route);
    }

    /// Follow an address bar change without re-rendering the same page
    pub fn sync_route(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_notice.set(None);
            self.set_route.set(route);
        }
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

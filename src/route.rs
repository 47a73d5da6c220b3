//! Hash Routing
//!
//! Two pages: the board at `/` and a task at `/task/{id}`. The path lives
//! in the URL fragment so any static host can serve the app.

use task_store::TaskId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Board,
    TaskDetail(TaskId),
    /// Anything else, kept for the error message
    NotFound(String),
}

impl Route {
    /// Parse an app path such as `/task/42`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Board;
        }
        // Digits only, so `+42` is not a second spelling of `42`
        let id = trimmed
            .strip_prefix("/task/")
            .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|id| id.parse::<TaskId>().ok());
        match id {
            Some(id) => Route::TaskDetail(id),
            None => Route::NotFound(path.to_string()),
        }
    }

    /// Parse `location.hash` (`#/task/42`, `#/`, or empty)
    pub fn from_hash(hash: &str) -> Self {
        Self::parse(hash.strip_prefix('#').unwrap_or(hash))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Board => "/".to_string(),
            Route::TaskDetail(id) => format!("/task/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Value for an anchor's `href`
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

/// Route for the current browser location
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Point the address bar at `route`
pub fn set_location(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.path()) {
            tracing::warn!(error = ?e, "failed to update location hash");
        }
    }
}

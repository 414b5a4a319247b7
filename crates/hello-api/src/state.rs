//! Application state shared across handlers.

/// Read-only state injected into the router at startup. Shared by `Arc`;
/// requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub greeting: String,
}

impl AppState {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }
}

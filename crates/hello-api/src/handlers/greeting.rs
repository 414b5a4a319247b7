//! Greeting handlers for the root route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, Uri};

use crate::state::AppState;

/// Root route; the surrounding middleware owns the request span.
pub async fn root(State(state): State<Arc<AppState>>) -> String {
    state.greeting.clone()
}

/// Root route that opens its own span, tagged with the inbound method and
/// path.
pub async fn traced_root(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> String {
    let span = tracing::info_span!(
        "handle_root",
        http.method = %method,
        http.path = %uri.path(),
    );
    let _enter = span.enter();

    state.greeting.clone()
}

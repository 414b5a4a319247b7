//! Route definitions for the two service variants.

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};

use crate::handlers::{greeting, health};
use crate::middleware::trace_request;
use crate::state::AppState;

/// Router for the variant that opens its span inside the root handler.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(greeting::traced_root))
        .route("/healthz", get(health::healthz))
        .with_state(state)
}

/// Router for the variant that wraps every route in the request-span
/// middleware.
pub fn traced_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(greeting::root))
        .route("/healthz", get(health::healthz))
        .layer(from_fn(trace_request))
        .with_state(state)
}

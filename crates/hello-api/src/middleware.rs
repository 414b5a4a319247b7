//! Per-request tracing middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{Instrument, Span};

/// Wrap a request in a server-side span. Applied router-wide by
/// [`traced_router`](crate::routes::traced_router).
pub async fn trace_request(request: Request<Body>, next: Next) -> Response {
    let span = request_span(request.method().as_str(), request.uri().path());
    next.run(request).instrument(span).await
}

/// Span for one inbound request; attributes derive only from that request.
pub fn request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        http.method = %method,
        http.path = %path,
    )
}

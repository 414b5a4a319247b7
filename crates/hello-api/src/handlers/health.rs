//! Health check handler.

/// Liveness probe. Fixed body, independent of telemetry state.
pub async fn healthz() -> &'static str {
    "ok"
}

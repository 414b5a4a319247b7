//! hello-lite: trace-only greeting service, spans created by middleware.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use hello_api::{AppState, server, traced_router};
use hello_telemetry::{OtlpConfig, TelemetryConfig, init_telemetry};

use config::Config;

const GREETING: &str = "Hello from hello-lite!";
const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    let telemetry = init_telemetry(&TelemetryConfig {
        service_name: config.service_name.clone(),
        service_version: env!("CARGO_PKG_VERSION").to_string(),
        otlp: OtlpConfig {
            endpoint: config.endpoint.clone(),
            ..OtlpConfig::default()
        },
        metrics: None,
    })
    .context("failed to initialize telemetry")?;

    tracing::info!(
        service = %config.service_name,
        endpoint = %config.endpoint,
        "telemetry initialized"
    );

    let state = Arc::new(AppState::new(GREETING));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let served = server::serve(traced_router(state), addr, server::shutdown_signal()).await;

    if let Err(error) = telemetry.shutdown(SHUTDOWN_DEADLINE).await {
        tracing::error!(%error, "telemetry shutdown failed");
    }
    tracing::info!("shutdown complete");

    served?;
    Ok(())
}

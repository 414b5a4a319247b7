//! Environment configuration for the lite variant.

use clap::Parser;

pub const DEFAULT_OTLP_ENDPOINT: &str =
    "http://otel-collector.demo-apps.svc.cluster.local:4318";

#[derive(Debug, Parser)]
#[command(
    name = "hello-lite",
    about = "Trace-only greeting service exporting spans over OTLP/HTTP"
)]
pub struct Config {
    /// Port for the HTTP listener.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Service name attached to all emitted telemetry.
    #[arg(long = "service-name", env = "OTEL_SERVICE_NAME", default_value = "hello-lite")]
    pub service_name: String,

    /// Base URL of the OTLP collector; `/v1/traces` is appended for export.
    #[arg(
        long = "otlp-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = DEFAULT_OTLP_ENDPOINT
    )]
    pub endpoint: String,
}

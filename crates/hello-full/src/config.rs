//! Environment configuration for the full variant.

use clap::Parser;

pub const DEFAULT_OTLP_ENDPOINT: &str =
    "http://otel-collector.monitoring.svc.cluster.local:4318";

#[derive(Debug, Parser)]
#[command(
    name = "hello-full",
    about = "Greeting service exporting traces and metrics over OTLP/HTTP"
)]
pub struct Config {
    /// Port for the HTTP listener.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Service name attached to all emitted telemetry.
    #[arg(long = "service-name", env = "OTEL_SERVICE_NAME", default_value = "hello-full")]
    pub service_name: String,

    /// Base URL of the OTLP collector; signal paths are appended per signal.
    #[arg(
        long = "otlp-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = DEFAULT_OTLP_ENDPOINT
    )]
    pub endpoint: String,
}

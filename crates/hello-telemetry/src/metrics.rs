//! Metric exporter and meter provider construction.

use std::time::Duration;

use opentelemetry_otlp::{MetricExporter, Protocol, WithExportConfig};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::metrics::{PeriodicReader, SdkMeterProvider};
use opentelemetry_sdk::runtime;

use crate::tracer::{OtlpConfig, TelemetryError};

/// Periodic metrics push configuration.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub interval: Duration,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(60),
        }
    }
}

/// OTLP metric endpoint for a collector base URL.
pub fn metrics_url(base: &str) -> String {
    format!("{}/v1/metrics", base.trim_end_matches('/'))
}

/// Build the OTLP/HTTP metric exporter. Same eager construction contract as
/// the span exporter.
pub fn build_metric_exporter(otlp: &OtlpConfig) -> Result<MetricExporter, TelemetryError> {
    MetricExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(metrics_url(&otlp.endpoint))
        .with_timeout(otlp.timeout)
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))
}

/// Meter provider pushing aggregated metrics on a fixed interval.
pub fn build_meter_provider(
    exporter: MetricExporter,
    resource: Resource,
    interval: Duration,
) -> SdkMeterProvider {
    let reader = PeriodicReader::builder(exporter, runtime::Tokio)
        .with_interval(interval)
        .build();

    SdkMeterProvider::builder()
        .with_reader(reader)
        .with_resource(resource)
        .build()
}

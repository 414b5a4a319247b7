//! Trace exporter and provider construction, plus whole-process telemetry
//! initialization.

use std::time::Duration;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, runtime,
    trace::{RandomIdGenerator, Sampler, TracerProvider as SdkTracerProvider},
};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::metrics::{build_meter_provider, build_metric_exporter, MetricsConfig};
use crate::resource::build_resource;
use crate::shutdown::Telemetry;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(String),
    #[error("telemetry shutdown failed: {0}")]
    Shutdown(String),
    #[error("telemetry shutdown exceeded deadline of {0:?}")]
    ShutdownTimeout(Duration),
}

/// OTLP collector connection configuration.
#[derive(Debug, Clone)]
pub struct OtlpConfig {
    /// Base URL of the collector. Signal paths (`/v1/traces`, `/v1/metrics`)
    /// are appended per signal; plaintext HTTP transport.
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for OtlpConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4318".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Telemetry configuration for one service process.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub service_version: String,
    pub otlp: OtlpConfig,
    /// Metrics push configuration; `None` runs the process trace-only.
    pub metrics: Option<MetricsConfig>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "hello-otel".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            otlp: OtlpConfig::default(),
            metrics: None,
        }
    }
}

/// OTLP trace endpoint for a collector base URL.
pub fn traces_url(base: &str) -> String {
    format!("{}/v1/traces", base.trim_end_matches('/'))
}

/// Build the OTLP/HTTP span exporter.
///
/// Construction is eager and fallible; batching and retry stay with the SDK
/// batch processor. A failed network flush at runtime is logged by the SDK and
/// the spans are dropped, request handling is never affected.
pub fn build_span_exporter(otlp: &OtlpConfig) -> Result<SpanExporter, TelemetryError> {
    SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(traces_url(&otlp.endpoint))
        .with_timeout(otlp.timeout)
        .build()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))
}

/// Tracer provider batching finished spans on the tokio runtime.
pub fn build_tracer_provider(exporter: SpanExporter, resource: Resource) -> SdkTracerProvider {
    SdkTracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_sampler(Sampler::AlwaysOn)
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource)
        .build()
}

/// Initialize telemetry for the process.
///
/// Builds the resource descriptor and exporters, registers the providers
/// globally, and installs the tracing subscriber (env filter + fmt layer +
/// OpenTelemetry layer). Callers treat an `Err` as fatal and abort startup
/// rather than run unobserved.
///
/// Must be called once, from within a tokio runtime, before the HTTP listener
/// starts. Panics if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<Telemetry, TelemetryError> {
    let resource = build_resource(config);

    let span_exporter = build_span_exporter(&config.otlp)?;
    let tracer_provider = build_tracer_provider(span_exporter, resource.clone());
    let tracer = tracer_provider.tracer("hello-telemetry");
    global::set_tracer_provider(tracer_provider.clone());

    let meter_provider = match &config.metrics {
        Some(metrics) => {
            let exporter = build_metric_exporter(&config.otlp)?;
            let provider = build_meter_provider(exporter, resource, metrics.interval);
            global::set_meter_provider(provider.clone());
            Some(provider)
        }
        None => None,
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true);

    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    Ok(Telemetry::new(tracer_provider, meter_provider))
}

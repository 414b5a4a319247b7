//! OpenTelemetry lifecycle wrapper for the hello-otel services.
//!
//! Startup order: resource descriptor → OTLP/HTTP exporters (eager, so
//! misconfiguration fails before any traffic is served) → providers,
//! registered globally → tracing subscriber with the OpenTelemetry bridge
//! layer. [`init_telemetry`] returns a [`Telemetry`] guard; the caller invokes
//! [`Telemetry::shutdown`] exactly once, with a bounded deadline, on its way
//! out.

pub mod metrics;
pub mod resource;
pub mod shutdown;
pub mod tracer;

pub use metrics::{MetricsConfig, build_meter_provider, build_metric_exporter, metrics_url};
pub use resource::build_resource;
pub use shutdown::Telemetry;
pub use tracer::{
    OtlpConfig, TelemetryConfig, TelemetryError, build_span_exporter, build_tracer_provider,
    init_telemetry, traces_url,
};

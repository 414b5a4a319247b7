//! Provider guard and bounded shutdown.

use std::time::Duration;

use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::TracerProvider as SdkTracerProvider;

use crate::tracer::TelemetryError;

type ShutdownStep = (
    &'static str,
    Box<dyn FnOnce() -> Result<(), String> + Send>,
);

/// Handle to the live telemetry providers.
///
/// Returned by [`init_telemetry`](crate::init_telemetry). Owns the provider
/// handles, so shutdown happens exactly once regardless of which exit path the
/// caller takes.
pub struct Telemetry {
    tracer_provider: SdkTracerProvider,
    meter_provider: Option<SdkMeterProvider>,
}

impl Telemetry {
    pub(crate) fn new(
        tracer_provider: SdkTracerProvider,
        meter_provider: Option<SdkMeterProvider>,
    ) -> Self {
        Self {
            tracer_provider,
            meter_provider,
        }
    }

    /// Flush and close every registered provider.
    ///
    /// Every provider's shutdown is attempted even when an earlier one fails;
    /// the first error encountered is the one reported. The whole operation is
    /// bounded by `deadline`; providers still busy when it expires are
    /// abandoned, not awaited.
    pub async fn shutdown(self, deadline: Duration) -> Result<(), TelemetryError> {
        let Telemetry {
            tracer_provider,
            meter_provider,
        } = self;

        let mut steps: Vec<ShutdownStep> = vec![(
            "tracer",
            Box::new(move || tracer_provider.shutdown().map_err(|e| e.to_string())),
        )];
        if let Some(meter_provider) = meter_provider {
            steps.push((
                "meter",
                Box::new(move || meter_provider.shutdown().map_err(|e| e.to_string())),
            ));
        }

        shutdown_with_deadline(steps, deadline).await
    }
}

/// Run the steps on a blocking thread, abandoning them at the deadline.
async fn shutdown_with_deadline(
    steps: Vec<ShutdownStep>,
    deadline: Duration,
) -> Result<(), TelemetryError> {
    let task = tokio::task::spawn_blocking(move || run_steps(steps));
    match tokio::time::timeout(deadline, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(TelemetryError::Shutdown(join_err.to_string())),
        Err(_) => Err(TelemetryError::ShutdownTimeout(deadline)),
    }
}

/// Attempt every step; report the first failure after all have run.
fn run_steps(steps: Vec<ShutdownStep>) -> Result<(), TelemetryError> {
    let mut first_err = None;
    for (provider, step) in steps {
        if let Err(error) = step() {
            tracing::warn!(provider, %error, "provider shutdown failed");
            if first_err.is_none() {
                first_err = Some(TelemetryError::Shutdown(format!("{provider}: {error}")));
            }
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

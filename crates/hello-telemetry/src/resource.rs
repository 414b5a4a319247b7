//! Resource descriptor construction.

use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;

use crate::tracer::TelemetryConfig;

/// Build the immutable attribute set identifying this process.
///
/// Attached to every span and metric the process emits; never mutated after
/// construction.
pub fn build_resource(config: &TelemetryConfig) -> Resource {
    Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", config.service_version.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::Key;

    #[test]
    fn test_service_name_matches_config() {
        let config = TelemetryConfig {
            service_name: "checkout".to_string(),
            ..TelemetryConfig::default()
        };
        let resource = build_resource(&config);
        let value = resource
            .get(Key::new("service.name"))
            .expect("service.name attribute");
        assert_eq!(value.to_string(), "checkout");
    }

    #[test]
    fn test_default_service_name_and_version() {
        let resource = build_resource(&TelemetryConfig::default());
        let name = resource
            .get(Key::new("service.name"))
            .expect("service.name attribute");
        assert_eq!(name.to_string(), "hello-otel");
        assert!(resource.get(Key::new("service.version")).is_some());
    }
}

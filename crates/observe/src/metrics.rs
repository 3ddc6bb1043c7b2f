use {
    prometheus::Encoder,
    std::{collections::HashMap, sync::OnceLock},
};

/// Global metrics registry used by all components.
static REGISTRY: OnceLock<prometheus_metric_storage::StorageRegistry> = OnceLock::new();

/// Configure the global metrics registry.
///
/// Allows specifying a common prefix that will be added to all metric
/// names, as well as common labels. Must be called before any call to
/// [`get_storage_registry`], ideally at the very beginning of `main`.
///
/// # Panics
///
/// Panics if called twice, after any call to [`get_storage_registry`], or
/// with an invalid registry configuration.
pub fn setup_registry(prefix: Option<String>, labels: Option<HashMap<String, String>>) {
    let registry = prometheus::Registry::new_custom(prefix, labels).unwrap();
    let storage_registry = prometheus_metric_storage::StorageRegistry::new(registry);
    REGISTRY.set(storage_registry).unwrap();
}

/// Like [`setup_registry`], but can be called multiple times in a row.
/// Later calls are ignored.
///
/// Useful for tests.
pub fn setup_registry_reentrant(prefix: Option<String>, labels: Option<HashMap<String, String>>) {
    let registry = prometheus::Registry::new_custom(prefix, labels).unwrap();
    let storage_registry = prometheus_metric_storage::StorageRegistry::new(registry);
    REGISTRY.set(storage_registry).ok();
}

/// Get the global instance of the metrics registry.
pub fn get_registry() -> &'static prometheus::Registry {
    get_storage_registry().registry()
}

/// Get the global instance of the metric storage registry.
///
/// Falls back to a default registry when [`setup_registry`] was never
/// called. Panicking instead would make unit tests miserable since there
/// is no hook that runs setup before each test.
pub fn get_storage_registry() -> &'static prometheus_metric_storage::StorageRegistry {
    REGISTRY.get_or_init(prometheus_metric_storage::StorageRegistry::default)
}

/// Render the registry's current state in the prometheus text exposition
/// format. The host process decides how to publish it; this crate owns no
/// network endpoint.
pub fn encode(registry: &prometheus::Registry) -> String {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_registered_counters() {
        setup_registry_reentrant(None, None);
        let counter = prometheus::IntCounter::new("observe_test_events", "test counter").unwrap();
        get_registry().register(Box::new(counter.clone())).unwrap();
        counter.inc();

        let exported = encode(get_registry());
        assert!(exported.contains("observe_test_events 1"));
    }
}

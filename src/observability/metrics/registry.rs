//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use anyhow::Result;
use prometheus::Registry;
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Registry holding this crate's metrics, for the embedding controller to expose
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Register all metrics with the Prometheus registry
///
/// Must be called once; a second call fails with a duplicate registration error.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn register_metrics() -> Result<()> {
    super::status_metrics::register_status_metrics()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::metrics::{increment_status_conflicts, increment_status_updates};

    #[test]
    fn test_register_metrics_exposes_status_counters() {
        register_metrics().unwrap();
        increment_status_updates("RegistryTestKind", "updated");
        increment_status_conflicts("RegistryTestKind");

        let names: Vec<String> = registry()
            .gather()
            .iter()
            .map(|family| family.name().to_string())
            .collect();
        assert!(names.contains(&"submariner_addon_status_updates_total".to_string()));
        assert!(names.contains(&"submariner_addon_status_conflicts_total".to_string()));

        assert!(register_metrics().is_err());
    }
}

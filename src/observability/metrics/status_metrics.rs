//! # Status Metrics
//!
//! Counters for status updates and the conflicts they ran into.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::IntCounterVec;
use std::sync::LazyLock;

static STATUS_UPDATES_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "submariner_addon_status_updates_total",
            "Total number of status update calls by resource kind and result (updated, unchanged, error)",
        ),
        &["kind", "result"],
    )
    .expect("Failed to create STATUS_UPDATES_TOTAL metric - this should never happen")
});

static STATUS_CONFLICTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "submariner_addon_status_conflicts_total",
            "Total number of status writes rejected because of a stale resource version",
        ),
        &["kind"],
    )
    .expect("Failed to create STATUS_CONFLICTS_TOTAL metric - this should never happen")
});

/// Register status metrics with the registry
pub(crate) fn register_status_metrics() -> Result<()> {
    REGISTRY.register(Box::new(STATUS_UPDATES_TOTAL.clone()))?;
    REGISTRY.register(Box::new(STATUS_CONFLICTS_TOTAL.clone()))?;
    Ok(())
}

/// Count one `update_status` call by resource kind and result
///
/// `result` is one of `updated`, `unchanged` or `error`.
pub fn increment_status_updates(kind: &str, result: &str) {
    STATUS_UPDATES_TOTAL.with_label_values(&[kind, result]).inc();
}

/// Count one status write rejected with a conflict
pub fn increment_status_conflicts(kind: &str) {
    STATUS_CONFLICTS_TOTAL.with_label_values(&[kind]).inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_status_updates() {
        let counter = STATUS_UPDATES_TOTAL.with_label_values(&["MetricsTestKind", "updated"]);
        let before = counter.get();
        increment_status_updates("MetricsTestKind", "updated");
        assert_eq!(counter.get(), before + 1u64);
    }

    #[test]
    fn test_increment_status_conflicts() {
        let counter = STATUS_CONFLICTS_TOTAL.with_label_values(&["MetricsTestKind"]);
        let before = counter.get();
        increment_status_conflicts("MetricsTestKind");
        increment_status_conflicts("MetricsTestKind");
        assert_eq!(counter.get(), before + 2u64);
    }
}

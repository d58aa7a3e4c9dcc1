//! # Resource Status Helpers
//!
//! Per-kind entry points onto the generic committer.

use super::commit::{StatusCommitter, StatusUpdate, StatusUpdateError};
use crate::config::StatusConfig;
use crate::crd::{
    Condition, ManagedClusterAddOn, ManagedClusterAddOnStatus, SubmarinerConfig,
    SubmarinerConfigStatus,
};
use crate::store::{ResourceRef, StatusStore};

/// Mutation that always reports `condition`, whatever the current status holds
pub fn set_condition<S>(condition: Condition) -> impl Fn(&S) -> Condition {
    move |_: &S| condition.clone()
}

/// `set_condition` for SubmarinerConfig status
pub fn submariner_config_condition(
    condition: Condition,
) -> impl Fn(&SubmarinerConfigStatus) -> Condition {
    set_condition::<SubmarinerConfigStatus>(condition)
}

/// `set_condition` for ManagedClusterAddOn status
pub fn addon_condition(condition: Condition) -> impl Fn(&ManagedClusterAddOnStatus) -> Condition {
    set_condition::<ManagedClusterAddOnStatus>(condition)
}

/// Update a condition on the SubmarinerConfig `namespace/name`
pub async fn update_submariner_config_status<S, F>(
    committer: &StatusCommitter<S>,
    namespace: &str,
    name: &str,
    mutation: F,
) -> Result<StatusUpdate<SubmarinerConfigStatus>, StatusUpdateError>
where
    S: StatusStore<SubmarinerConfig>,
    F: Fn(&SubmarinerConfigStatus) -> Condition,
{
    committer
        .update_status::<SubmarinerConfig, F>(&ResourceRef::new(namespace, name), mutation)
        .await
}

/// Update a condition on the add-on object of a managed cluster
///
/// The add-on lives in the cluster namespace under `config.addon_name`.
pub async fn update_managed_cluster_addon_status<S, F>(
    committer: &StatusCommitter<S>,
    config: &StatusConfig,
    cluster_namespace: &str,
    mutation: F,
) -> Result<StatusUpdate<ManagedClusterAddOnStatus>, StatusUpdateError>
where
    S: StatusStore<ManagedClusterAddOn>,
    F: Fn(&ManagedClusterAddOnStatus) -> Condition,
{
    committer
        .update_status::<ManagedClusterAddOn, F>(
            &ResourceRef::new(cluster_namespace, config.addon_name.as_str()),
            mutation,
        )
        .await
}

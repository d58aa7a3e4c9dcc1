//! # ManagedClusterAddOn
//!
//! The add-on registration object the hub keeps per managed cluster.

use crate::crd::Condition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ManagedClusterAddOn Custom Resource Definition
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[kube(
    kind = "ManagedClusterAddOn",
    group = "addon.open-cluster-management.io",
    version = "v1alpha1",
    namespaced,
    status = "ManagedClusterAddOnStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnSpec {
    /// Namespace on the managed cluster the add-on agent is installed into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_namespace: Option<String>,
}

/// Status of the ManagedClusterAddOn resource
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAddOnStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// relatedObjects, addOnMeta, registrations and anything else the add-on
    /// framework writes
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

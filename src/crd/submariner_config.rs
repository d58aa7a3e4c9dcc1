//! # SubmarinerConfig
//!
//! Per-cluster Submariner configuration. Only the status conditions and the
//! cluster info are typed; the rest of the status is carried through untouched.

use crate::crd::Condition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SubmarinerConfig Custom Resource Definition
///
/// Lives in the managed cluster's namespace on the hub.
///
/// # Example
///
/// ```yaml
/// apiVersion: submarineraddon.open-cluster-management.io/v1alpha1
/// kind: SubmarinerConfig
/// metadata:
///   name: submariner
///   namespace: cluster1
/// spec:
///   cableDriver: libreswan
///   IPSecIKEPort: 500
///   IPSecNATTPort: 4500
/// ```
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[kube(
    kind = "SubmarinerConfig",
    group = "submarineraddon.open-cluster-management.io",
    version = "v1alpha1",
    namespaced,
    status = "SubmarinerConfigStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct SubmarinerConfigSpec {
    /// Cable driver used between gateways (libreswan, wireguard, vxlan)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_driver: Option<String>,
    /// IPsec IKE port
    #[serde(default, rename = "IPSecIKEPort", skip_serializing_if = "Option::is_none")]
    pub ipsec_ike_port: Option<i32>,
    /// IPsec NAT-T port
    #[serde(default, rename = "IPSecNATTPort", skip_serializing_if = "Option::is_none")]
    pub ipsec_natt_port: Option<i32>,
    /// Cloud credentials secret in the same namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_secret: Option<SecretReference>,
}

/// Reference to a secret in the resource namespace
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default, schemars::JsonSchema)]
pub struct SecretReference {
    pub name: String,
}

/// Status of the SubmarinerConfig resource
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmarinerConfigStatus {
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Descriptive metadata of the managed cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_cluster_info: Option<ManagedClusterInfo>,
    /// Status fields owned by other writers, preserved on replace
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Cluster metadata extracted from the ManagedCluster claims
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterInfo {
    #[serde(default)]
    pub cluster_name: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub infra_id: String,
}

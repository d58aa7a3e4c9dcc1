//! # ManagedCluster
//!
//! Read-only view of the hub's ManagedCluster, used for its claims.

use serde::{Deserialize, Serialize};

/// ManagedCluster Custom Resource Definition (cluster scoped)
#[derive(kube::CustomResource, Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[kube(
    kind = "ManagedCluster",
    group = "cluster.open-cluster-management.io",
    version = "v1",
    status = "ManagedClusterStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterSpec {
    #[serde(default)]
    pub hub_accepts_client: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterStatus {
    /// Claims reported by the klusterlet
    #[serde(default)]
    pub cluster_claims: Vec<ManagedClusterClaim>,
}

/// A single name/value claim about the cluster
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default, schemars::JsonSchema)]
pub struct ManagedClusterClaim {
    pub name: String,
    pub value: String,
}

impl ManagedClusterClaim {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

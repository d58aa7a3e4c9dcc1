//! # Cluster Info
//!
//! Descriptive cluster metadata read from ManagedCluster claims.

use crate::constants::{CLAIM_INFRASTRUCTURE, CLAIM_PLATFORM, CLAIM_PRODUCT, CLAIM_REGION};
use crate::crd::{ManagedCluster, ManagedClusterInfo};
use kube::ResourceExt;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct InfrastructureClaim {
    #[serde(rename = "infraName", default)]
    infra_name: String,
}

fn claim<'a>(cluster: &'a ManagedCluster, name: &str) -> Option<&'a str> {
    cluster
        .status
        .as_ref()?
        .cluster_claims
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.value.as_str())
}

/// Product (vendor) claim of the cluster, empty when not reported
pub fn cluster_product(cluster: &ManagedCluster) -> String {
    claim(cluster, CLAIM_PRODUCT).unwrap_or_default().to_string()
}

/// Collect vendor, platform, region and infra id of a managed cluster
///
/// Missing claims leave the matching field empty.
pub fn managed_cluster_info(cluster: &ManagedCluster) -> ManagedClusterInfo {
    let cluster_name = cluster.name_any();

    let infra_id = match claim(cluster, CLAIM_INFRASTRUCTURE) {
        Some(raw) => match serde_json::from_str::<InfrastructureClaim>(raw) {
            Ok(infra) => infra.infra_name,
            Err(e) => {
                warn!(
                    "Ignoring malformed {} claim on cluster {}: {}",
                    CLAIM_INFRASTRUCTURE, cluster_name, e
                );
                String::new()
            }
        },
        None => String::new(),
    };

    ManagedClusterInfo {
        vendor: cluster_product(cluster),
        platform: claim(cluster, CLAIM_PLATFORM).unwrap_or_default().to_string(),
        region: claim(cluster, CLAIM_REGION).unwrap_or_default().to_string(),
        infra_id,
        cluster_name,
    }
}

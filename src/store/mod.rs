//! # Status Stores
//!
//! The remote object store seen by the status committer: fetch a resource and
//! replace its status sub-resource under optimistic concurrency.
//!
//! - `kubernetes` - `StatusStore` over the Kubernetes API
//! - `memory` - in-process store with resource-version checks

mod kubernetes;
mod memory;

pub use kubernetes::KubeStatusStore;
pub use memory::InMemoryStatusStore;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Identifies a namespaced resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceRef {
    pub namespace: String,
    pub name: String,
}

impl ResourceRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Reference to an already fetched object
    pub fn from_resource<K: kube::Resource>(resource: &K) -> Self {
        let meta = resource.meta();
        Self {
            namespace: meta.namespace.clone().unwrap_or_default(),
            name: meta.name.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Failure reported by a status store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resource does not exist
    #[error("{kind} {reference} not found")]
    NotFound {
        kind: &'static str,
        reference: ResourceRef,
    },
    /// The resource version sent with the write is stale
    #[error("conflict writing status of {kind} {reference}: {message}")]
    Conflict {
        kind: &'static str,
        reference: ResourceRef,
        message: String,
    },
    #[error("Kubernetes API request failed: {0}")]
    Api(#[source] kube::Error),
    #[error("failed to serialize status: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("status store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Remote store consumed by the status committer
///
/// `replace_status` writes the whole status sub-resource of `resource` and must
/// reject the write with `StoreError::Conflict` when the resource version it
/// carries is no longer current.
#[async_trait]
pub trait StatusStore<K>: Send + Sync {
    async fn get(&self, reference: &ResourceRef) -> Result<K, StoreError>;

    async fn replace_status(&self, resource: &K) -> Result<K, StoreError>;
}

//! # Kubernetes Status Store
//!
//! Reads resources with `GET` and writes them back through the `/status`
//! sub-resource with `PUT`. The API server rejects the `PUT` with 409 when
//! `metadata.resourceVersion` is stale.

use super::{ResourceRef, StatusStore, StoreError};
use crate::controller::status::StatusResource;
use async_trait::async_trait;
use k8s_openapi::NamespaceResourceScope;
use kube::api::PostParams;
use kube::{Api, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// `StatusStore` backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeStatusStore {
    client: Client,
}

impl KubeStatusStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api<K>(&self, namespace: &str) -> Api<K>
    where
        K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>,
    {
        Api::namespaced(self.client.clone(), namespace)
    }
}

impl fmt::Debug for KubeStatusStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeStatusStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl<K> StatusStore<K> for KubeStatusStore
where
    K: StatusResource
        + kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Serialize
        + DeserializeOwned
        + fmt::Debug
        + 'static,
{
    async fn get(&self, reference: &ResourceRef) -> Result<K, StoreError> {
        self.api::<K>(&reference.namespace)
            .get(&reference.name)
            .await
            .map_err(|e| classify_error(K::KIND, reference, e))
    }

    async fn replace_status(&self, resource: &K) -> Result<K, StoreError> {
        let reference = ResourceRef::from_resource(resource);
        let data = serde_json::to_vec(resource)?;

        debug!(
            "Replacing status of {} {} at resourceVersion {:?}",
            K::KIND,
            reference,
            resource.meta().resource_version
        );

        self.api::<K>(&reference.namespace)
            .replace_status(&reference.name, &PostParams::default(), data)
            .await
            .map_err(|e| classify_error(K::KIND, &reference, e))
    }
}

/// Map API errors onto the store taxonomy (404 -> NotFound, 409 -> Conflict)
fn classify_error(kind: &'static str, reference: &ResourceRef, error: kube::Error) -> StoreError {
    match error {
        kube::Error::Api(api_err) if api_err.code == 404 => StoreError::NotFound {
            kind,
            reference: reference.clone(),
        },
        kube::Error::Api(api_err) if api_err.code == 409 => StoreError::Conflict {
            kind,
            reference: reference.clone(),
            message: api_err.message.clone(),
        },
        other => StoreError::Api(other),
    }
}

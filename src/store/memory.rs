//! # In-Memory Status Store
//!
//! A `StatusStore` that keeps objects in process and enforces resource versions
//! the way the API server does. Conflicts and write failures can be injected to
//! exercise the committer's retry path.

use super::{ResourceRef, StatusStore, StoreError};
use crate::controller::status::StatusResource;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct State<K> {
    objects: BTreeMap<ResourceRef, K>,
    /// Writes that will race with a simulated concurrent writer
    pending_conflicts: usize,
    pending_write_error: Option<String>,
}

/// In-process `StatusStore`
#[derive(Debug)]
pub struct InMemoryStatusStore<K> {
    state: Mutex<State<K>>,
    gets: AtomicUsize,
    writes: AtomicUsize,
}

impl<K> Default for InMemoryStatusStore<K> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                objects: BTreeMap::new(),
                pending_conflicts: 0,
                pending_write_error: None,
            }),
            gets: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }
}

impl<K> InMemoryStatusStore<K>
where
    K: StatusResource + kube::Resource,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State<K>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store an object, assigning resourceVersion "1" when it has none
    pub fn insert(&self, mut resource: K) -> ResourceRef {
        if resource.meta().resource_version.is_none() {
            resource.meta_mut().resource_version = Some("1".to_string());
        }
        let reference = ResourceRef::from_resource(&resource);
        self.lock().objects.insert(reference.clone(), resource);
        reference
    }

    /// Current stored copy of an object
    pub fn object(&self, reference: &ResourceRef) -> Option<K> {
        self.lock().objects.get(reference).cloned()
    }

    /// Let a concurrent writer bump the stored resource version right before
    /// each of the next `count` status writes
    pub fn inject_conflicts(&self, count: usize) {
        self.lock().pending_conflicts = count;
    }

    /// Fail the next status write with `StoreError::Unavailable`
    pub fn fail_next_write(&self, message: impl Into<String>) {
        self.lock().pending_write_error = Some(message.into());
    }

    /// Number of `get` calls served
    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Number of `replace_status` calls received
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn bump_resource_version<K: kube::Resource>(resource: &mut K) {
    let next = resource
        .meta()
        .resource_version
        .as_deref()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
        + 1;
    resource.meta_mut().resource_version = Some(next.to_string());
}

#[async_trait]
impl<K> StatusStore<K> for InMemoryStatusStore<K>
where
    K: StatusResource + kube::Resource,
{
    async fn get(&self, reference: &ResourceRef) -> Result<K, StoreError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.lock()
            .objects
            .get(reference)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: K::KIND,
                reference: reference.clone(),
            })
    }

    async fn replace_status(&self, resource: &K) -> Result<K, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let reference = ResourceRef::from_resource(resource);
        let mut state = self.lock();

        if let Some(message) = state.pending_write_error.take() {
            return Err(StoreError::Unavailable(message));
        }

        let racing = state.pending_conflicts > 0;
        if racing {
            state.pending_conflicts -= 1;
        }

        let Some(stored) = state.objects.get_mut(&reference) else {
            return Err(StoreError::NotFound {
                kind: K::KIND,
                reference,
            });
        };

        if racing {
            bump_resource_version(stored);
        }

        if stored.meta().resource_version != resource.meta().resource_version {
            return Err(StoreError::Conflict {
                kind: K::KIND,
                message: format!(
                    "the object has been modified; stored resourceVersion {:?}, request carried {:?}",
                    stored.meta().resource_version,
                    resource.meta().resource_version
                ),
                reference,
            });
        }

        // Only the status sub-resource is written
        if let Some(status) = resource.status() {
            stored.set_status(status.clone());
        }
        bump_resource_version(stored);
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{SubmarinerConfig, SubmarinerConfigSpec, SubmarinerConfigStatus};

    fn config() -> SubmarinerConfig {
        let mut config = SubmarinerConfig::new("submariner", SubmarinerConfigSpec::default());
        config.metadata.namespace = Some("cluster1".to_string());
        config
    }

    #[tokio::test]
    async fn test_replace_status_bumps_resource_version() {
        let store = InMemoryStatusStore::new();
        let reference = store.insert(config());

        let mut fetched: SubmarinerConfig = store.get(&reference).await.unwrap();
        fetched.status = Some(SubmarinerConfigStatus::default());
        let updated = store.replace_status(&fetched).await.unwrap();

        assert_eq!(updated.metadata.resource_version.as_deref(), Some("2"));
        assert!(updated.status.is_some());
    }

    #[tokio::test]
    async fn test_stale_write_conflicts() {
        let store = InMemoryStatusStore::new();
        let reference = store.insert(config());
        let fetched: SubmarinerConfig = store.get(&reference).await.unwrap();

        store.replace_status(&fetched).await.unwrap();
        let err = store.replace_status(&fetched).await.unwrap_err();

        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_replace_status_keeps_stored_spec() {
        let store = InMemoryStatusStore::new();
        let reference = store.insert(config());
        let mut fetched: SubmarinerConfig = store.get(&reference).await.unwrap();
        fetched.spec.cable_driver = Some("wireguard".to_string());

        let updated = store.replace_status(&fetched).await.unwrap();

        assert!(updated.spec.cable_driver.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = InMemoryStatusStore::<SubmarinerConfig>::new();
        let err = store
            .get(&ResourceRef::new("cluster1", "missing"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "SubmarinerConfig cluster1/missing not found");
    }
}

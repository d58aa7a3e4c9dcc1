//! # Status Commit
//!
//! Fetch -> mutate -> merge -> write, restarted from the fetch whenever the
//! write loses an optimistic-concurrency race.
//!
//! ```text
//! START -> FETCH -> MERGE -> (no-op)   -> DONE
//!                         -> (changed) -> WRITE -> DONE
//!                                               -> (conflict)    -> FETCH
//!                                               -> (other error) -> FAILED
//! FETCH -> (not found) -> FAILED
//! ```

use super::backoff::RetryConfig;
use super::merge::merge_condition;
use super::resource::{ConditionedStatus, StatusResource};
use crate::crd::Condition;
use crate::observability::metrics;
use crate::store::{ResourceRef, StatusStore, StoreError};
use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn, Instrument};

/// Clock used for transition times, truncated to whole seconds on use
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Result of a status update
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate<S> {
    /// Status as stored after the call
    pub status: S,
    /// Whether a write was issued and accepted
    pub changed: bool,
}

/// Status update failure
///
/// Conflicts are retried internally and only surface once the retry bound is
/// exhausted.
#[derive(Debug, Error)]
pub enum StatusUpdateError {
    /// The resource does not exist; not retried
    #[error("{kind} {reference} not found")]
    NotFound {
        kind: &'static str,
        reference: ResourceRef,
    },
    /// Fetching the resource failed for a reason other than absence
    #[error("failed to get {kind} {reference}: {source}")]
    Fetch {
        kind: &'static str,
        reference: ResourceRef,
        #[source]
        source: StoreError,
    },
    /// The status write was rejected with a non-conflict error
    #[error("failed to update status of {kind} {reference}: {source}")]
    Write {
        kind: &'static str,
        reference: ResourceRef,
        #[source]
        source: StoreError,
    },
    /// Every attempt lost the resource version race
    #[error("status of {kind} {reference} still conflicting after {attempts} attempts")]
    ConflictRetriesExhausted {
        kind: &'static str,
        reference: ResourceRef,
        attempts: u32,
    },
}

impl StatusUpdateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatusUpdateError::NotFound { .. })
    }
}

/// Commits condition changes to a `StatusStore`
pub struct StatusCommitter<S> {
    store: S,
    retry: RetryConfig,
    clock: Clock,
}

impl<S> StatusCommitter<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            retry: RetryConfig::default(),
            clock: Arc::new(Utc::now),
        }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// Apply the condition produced by `mutation` to the status of `reference`
    ///
    /// `mutation` receives the freshly fetched status on every attempt and may
    /// be called more than once. No write is issued when the merged conditions
    /// equal the stored ones.
    pub async fn update_status<K, F>(
        &self,
        reference: &ResourceRef,
        mutation: F,
    ) -> Result<StatusUpdate<K::Status>, StatusUpdateError>
    where
        K: StatusResource,
        S: StatusStore<K>,
        F: Fn(&K::Status) -> Condition,
    {
        let span = tracing::info_span!(
            "status.update",
            resource.kind = K::KIND,
            resource.namespace = %reference.namespace,
            resource.name = %reference.name
        );

        let result = self
            .commit::<K, F>(reference, &mutation)
            .instrument(span)
            .await;

        let outcome = match &result {
            Ok(update) if update.changed => "updated",
            Ok(_) => "unchanged",
            Err(_) => "error",
        };
        metrics::increment_status_updates(K::KIND, outcome);
        result
    }

    async fn commit<K, F>(
        &self,
        reference: &ResourceRef,
        mutation: &F,
    ) -> Result<StatusUpdate<K::Status>, StatusUpdateError>
    where
        K: StatusResource,
        S: StatusStore<K>,
        F: Fn(&K::Status) -> Condition,
    {
        let attempts = self.retry.attempts();

        for attempt in 1..=attempts {
            let mut resource = match self.store.get(reference).await {
                Ok(resource) => resource,
                Err(StoreError::NotFound { .. }) => {
                    return Err(StatusUpdateError::NotFound {
                        kind: K::KIND,
                        reference: reference.clone(),
                    });
                }
                Err(source) => {
                    return Err(StatusUpdateError::Fetch {
                        kind: K::KIND,
                        reference: reference.clone(),
                        source,
                    });
                }
            };

            let current = resource.status().cloned().unwrap_or_default();
            // The API server stores transition times at second precision
            let mut incoming = mutation(&current);
            incoming.last_transition_time =
                incoming.last_transition_time.map(|t| t.trunc_subsecs(0));
            let now = (self.clock)().trunc_subsecs(0);
            let (merged, changed) = merge_condition(current.conditions(), &incoming, now);

            if !changed {
                debug!(
                    "Skipping status update - condition {} unchanged on {} {}",
                    incoming.r#type,
                    K::KIND,
                    reference
                );
                return Ok(StatusUpdate {
                    status: current,
                    changed: false,
                });
            }

            let mut status = current;
            *status.conditions_mut() = merged;
            resource.set_status(status.clone());

            match self.store.replace_status(&resource).await {
                Ok(updated) => {
                    info!(
                        "Updated condition {}={} ({}) on {} {}",
                        incoming.r#type,
                        incoming.status,
                        incoming.reason,
                        K::KIND,
                        reference
                    );
                    return Ok(StatusUpdate {
                        status: updated.status().cloned().unwrap_or(status),
                        changed: true,
                    });
                }
                Err(StoreError::Conflict { message, .. }) => {
                    metrics::increment_status_conflicts(K::KIND);
                    if attempt < attempts {
                        let delay = self.retry.backoff_for(attempt);
                        debug!(
                            "Conflict updating status of {} {} (attempt {}/{}), retrying in {:?}: {}",
                            K::KIND,
                            reference,
                            attempt,
                            attempts,
                            delay,
                            message
                        );
                        tokio::time::sleep(delay).await;
                    } else {
                        warn!(
                            "Conflict updating status of {} {} on final attempt {}: {}",
                            K::KIND, reference, attempt, message
                        );
                    }
                }
                Err(source) => {
                    return Err(StatusUpdateError::Write {
                        kind: K::KIND,
                        reference: reference.clone(),
                        source,
                    });
                }
            }
        }

        Err(StatusUpdateError::ConflictRetriesExhausted {
            kind: K::KIND,
            reference: reference.clone(),
            attempts,
        })
    }
}

impl<S: fmt::Debug> fmt::Debug for StatusCommitter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusCommitter")
            .field("store", &self.store)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

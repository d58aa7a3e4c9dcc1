//! # Conflict Backoff
//!
//! Bounded exponential backoff between fetch/merge/write cycles that lost an
//! optimistic-concurrency race.

use crate::constants::{
    DEFAULT_STATUS_UPDATE_BACKOFF_FACTOR, DEFAULT_STATUS_UPDATE_INITIAL_BACKOFF_MS,
    DEFAULT_STATUS_UPDATE_MAX_ATTEMPTS, DEFAULT_STATUS_UPDATE_MAX_BACKOFF_MS,
};
use std::time::Duration;

/// Retry policy for conflicting status writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total cycles allowed, including the first one (at least 1 is always made)
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub backoff_factor: u32,
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_STATUS_UPDATE_MAX_ATTEMPTS,
            initial_backoff: Duration::from_millis(DEFAULT_STATUS_UPDATE_INITIAL_BACKOFF_MS),
            backoff_factor: DEFAULT_STATUS_UPDATE_BACKOFF_FACTOR,
            max_backoff: Duration::from_millis(DEFAULT_STATUS_UPDATE_MAX_BACKOFF_MS),
        }
    }
}

impl RetryConfig {
    /// Retry immediately, up to `max_attempts` cycles
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_backoff: Duration::ZERO,
            backoff_factor: 1,
            max_backoff: Duration::ZERO,
        }
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay after the `conflict_count`-th conflict (1-indexed)
    ///
    /// The sequence with defaults: 10ms, 50ms, 250ms, 1s, 1s, ...
    pub fn backoff_for(&self, conflict_count: u32) -> Duration {
        let mut delay = self.initial_backoff;
        for _ in 1..conflict_count {
            if delay >= self.max_backoff {
                break;
            }
            delay = delay.saturating_mul(self.backoff_factor);
        }
        delay.min(self.max_backoff)
    }
}

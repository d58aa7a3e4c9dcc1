//! # Status Update Configuration
//!
//! Retry bound and add-on naming for the status committer.

use super::env_var_or_default;
use crate::controller::status::RetryConfig;
use std::time::Duration;

/// Status update configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    /// Maximum fetch/merge/write cycles per update before conflicts are surfaced
    pub max_attempts: u32,
    /// Delay before the first retry after a conflict (milliseconds)
    pub initial_backoff_ms: u64,
    /// Multiplier applied to the delay after each conflict
    pub backoff_factor: u32,
    /// Cap on the delay between attempts (milliseconds)
    pub max_backoff_ms: u64,
    /// Name of the ManagedClusterAddOn object in each cluster namespace
    pub addon_name: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            max_attempts: DEFAULT_STATUS_UPDATE_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_STATUS_UPDATE_INITIAL_BACKOFF_MS,
            backoff_factor: DEFAULT_STATUS_UPDATE_BACKOFF_FACTOR,
            max_backoff_ms: DEFAULT_STATUS_UPDATE_MAX_BACKOFF_MS,
            addon_name: DEFAULT_ADDON_NAME.to_string(),
        }
    }
}

impl StatusConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        use crate::constants::*;
        Self {
            max_attempts: env_var_or_default(
                "STATUS_UPDATE_MAX_ATTEMPTS",
                DEFAULT_STATUS_UPDATE_MAX_ATTEMPTS,
            ),
            initial_backoff_ms: env_var_or_default(
                "STATUS_UPDATE_INITIAL_BACKOFF_MS",
                DEFAULT_STATUS_UPDATE_INITIAL_BACKOFF_MS,
            ),
            backoff_factor: env_var_or_default(
                "STATUS_UPDATE_BACKOFF_FACTOR",
                DEFAULT_STATUS_UPDATE_BACKOFF_FACTOR,
            ),
            max_backoff_ms: env_var_or_default(
                "STATUS_UPDATE_MAX_BACKOFF_MS",
                DEFAULT_STATUS_UPDATE_MAX_BACKOFF_MS,
            ),
            addon_name: env_var_or_default("SUBMARINER_ADDON_NAME", DEFAULT_ADDON_NAME.to_string()),
        }
    }

    /// Retry policy for the status committer
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            backoff_factor: self.backoff_factor,
            max_backoff: Duration::from_millis(self.max_backoff_ms),
        }
    }
}

//! # Constants
//!
//! Default values and well-known names used across the crate.

/// Default add-on name, the ManagedClusterAddOn object in each cluster namespace
pub const DEFAULT_ADDON_NAME: &str = "submariner";

/// Default number of fetch/merge/write cycles before giving up on conflicts
pub const DEFAULT_STATUS_UPDATE_MAX_ATTEMPTS: u32 = 5;

/// Delay before the first retry after a conflict (milliseconds)
pub const DEFAULT_STATUS_UPDATE_INITIAL_BACKOFF_MS: u64 = 10;

/// Multiplier applied to the delay after every conflict
pub const DEFAULT_STATUS_UPDATE_BACKOFF_FACTOR: u32 = 5;

/// Upper bound for the delay between conflicting attempts (milliseconds)
pub const DEFAULT_STATUS_UPDATE_MAX_BACKOFF_MS: u64 = 1_000;

// Cluster claim names reported by the klusterlet
pub const CLAIM_PRODUCT: &str = "product.open-cluster-management.io";
pub const CLAIM_PLATFORM: &str = "platform.open-cluster-management.io";
pub const CLAIM_REGION: &str = "region.open-cluster-management.io";
pub const CLAIM_INFRASTRUCTURE: &str = "infrastructure.openshift.io";

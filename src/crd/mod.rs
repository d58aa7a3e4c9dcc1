//! # Custom Resource Definitions
//!
//! Resource types whose status this crate reads and writes.
//!
//! - `SubmarinerConfig` and `ManagedClusterAddOn` carry a condition sequence
//!   maintained by the status committer.
//! - `ManagedCluster` is only read for its cluster claims.

mod addon;
mod cluster;
mod condition;
mod submariner_config;

pub use addon::*;
pub use cluster::*;
pub use condition::*;
pub use submariner_config::*;

//! Submariner Add-on Status Library
//!
//! Records condition changes on SubmarinerConfig and ManagedClusterAddOn
//! status, committing them with optimistic concurrency.
//!
//! ```no_run
//! use submariner_addon_status::controller::status::{
//!     submariner_config_condition, update_submariner_config_status, StatusCommitter,
//! };
//! use submariner_addon_status::crd::{Condition, ConditionStatus};
//! use submariner_addon_status::store::KubeStatusStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = kube::Client::try_default().await?;
//! let committer = StatusCommitter::new(KubeStatusStore::new(client));
//! let condition = Condition::new(
//!     "SubmarinerClusterEnvironmentPrepared",
//!     ConditionStatus::True,
//!     "SubmarinerClusterEnvironmentPrepared",
//!     "Submariner cluster environment was prepared",
//! );
//! let update = update_submariner_config_status(
//!     &committer,
//!     "cluster1",
//!     "submariner",
//!     submariner_config_condition(condition),
//! )
//! .await?;
//! println!("changed: {}", update.changed);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod observability;
pub mod store;

// Re-export CRD types for convenience
pub use crd::*;

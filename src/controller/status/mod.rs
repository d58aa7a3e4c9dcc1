//! # Status Conditions
//!
//! Condition merging and optimistic-concurrency status commits.
//!
//! ## Sub-modules
//!
//! - `merge` - pure merge of one condition into a sequence
//! - `commit` - fetch/merge/write loop with conflict retries
//! - `backoff` - retry bound and delays between conflicting attempts
//! - `resource` - status accessors per resource kind
//! - `adapters` - SubmarinerConfig and ManagedClusterAddOn entry points

pub mod adapters;
pub mod backoff;
pub mod commit;
pub mod merge;
pub mod resource;

pub use adapters::*;
pub use backoff::RetryConfig;
pub use commit::{Clock, StatusCommitter, StatusUpdate, StatusUpdateError};
pub use merge::*;
pub use resource::{ConditionedStatus, StatusResource};

//! # Metrics Module
//!
//! Prometheus metrics for status updates.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup and registration
//! - `status_metrics` - Status update outcomes and conflicts

pub mod registry;
pub mod status_metrics;

pub use registry::*;
pub use status_metrics::*;

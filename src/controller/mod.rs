//! # Controller Helpers
//!
//! Status condition handling and cluster metadata used by the add-on
//! controllers.

pub mod cluster_info;
pub mod status;

pub use cluster_info::{cluster_product, managed_cluster_info};

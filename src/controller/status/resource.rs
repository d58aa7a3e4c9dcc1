//! # Conditioned Resources
//!
//! Maps each resource kind onto the status accessors the committer needs.

use crate::crd::{
    Condition, ManagedClusterAddOn, ManagedClusterAddOnStatus, SubmarinerConfig,
    SubmarinerConfigStatus,
};
use std::fmt;

/// A status type holding a condition sequence
pub trait ConditionedStatus: Clone + Default + fmt::Debug + Send + Sync {
    fn conditions(&self) -> &[Condition];

    fn conditions_mut(&mut self) -> &mut Vec<Condition>;
}

/// A resource whose status the committer can rewrite
pub trait StatusResource: Clone + Send + Sync {
    type Status: ConditionedStatus;

    /// Kind name used in logs, metrics and errors
    const KIND: &'static str;

    fn status(&self) -> Option<&Self::Status>;

    fn set_status(&mut self, status: Self::Status);
}

impl ConditionedStatus for SubmarinerConfigStatus {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.conditions
    }
}

impl StatusResource for SubmarinerConfig {
    type Status = SubmarinerConfigStatus;
    const KIND: &'static str = "SubmarinerConfig";

    fn status(&self) -> Option<&Self::Status> {
        self.status.as_ref()
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = Some(status);
    }
}

impl ConditionedStatus for ManagedClusterAddOnStatus {
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.conditions
    }
}

impl StatusResource for ManagedClusterAddOn {
    type Status = ManagedClusterAddOnStatus;
    const KIND: &'static str = "ManagedClusterAddOn";

    fn status(&self) -> Option<&Self::Status> {
        self.status.as_ref()
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = Some(status);
    }
}

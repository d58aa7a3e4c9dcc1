//! # Condition Merge
//!
//! Folds one incoming condition into a condition sequence and reports whether
//! anything observable changed.
//!
//! `lastTransitionTime` only moves when `status` flips. Reason or message edits
//! under the same status keep the stored timestamp.

use crate::crd::Condition;
use chrono::{DateTime, Utc};

/// Merge `incoming` into a copy of `existing`
///
/// Returns the merged sequence and whether it differs from `existing`.
/// When nothing changed the returned sequence equals `existing`.
pub fn merge_condition(
    existing: &[Condition],
    incoming: &Condition,
    now: DateTime<Utc>,
) -> (Vec<Condition>, bool) {
    let mut merged = existing.to_vec();
    let changed = set_status_condition(&mut merged, incoming, now);
    (merged, changed)
}

/// Merge `incoming` into `conditions` in place
///
/// - unknown type: appended, transition time is the incoming one if set, else `now`
/// - status flip: status, reason and message replaced, transition time set to `now`
/// - same status: reason and message updated, transition time kept
///
/// A stored `observed_generation` survives unless `incoming` carries one.
pub fn set_status_condition(
    conditions: &mut Vec<Condition>,
    incoming: &Condition,
    now: DateTime<Utc>,
) -> bool {
    let Some(current) = conditions
        .iter_mut()
        .find(|c| c.r#type == incoming.r#type)
    else {
        let mut added = incoming.clone();
        added.last_transition_time = Some(incoming.last_transition_time.unwrap_or(now));
        conditions.push(added);
        return true;
    };

    if current.status != incoming.status {
        current.status = incoming.status;
        current.reason.clone_from(&incoming.reason);
        current.message.clone_from(&incoming.message);
        current.last_transition_time = Some(now);
        if incoming.observed_generation.is_some() {
            current.observed_generation = incoming.observed_generation;
        }
        return true;
    }

    let mut changed = false;
    if incoming.observed_generation.is_some()
        && current.observed_generation != incoming.observed_generation
    {
        current.observed_generation = incoming.observed_generation;
        changed = true;
    }
    if current.reason != incoming.reason {
        current.reason.clone_from(&incoming.reason);
        changed = true;
    }
    if current.message != incoming.message {
        current.message.clone_from(&incoming.message);
        changed = true;
    }
    changed
}

/// Look up a condition by type
pub fn find_condition<'a>(conditions: &'a [Condition], condition_type: &str) -> Option<&'a Condition> {
    conditions.iter().find(|c| c.r#type == condition_type)
}

/// True when a condition of this type exists with status True
pub fn is_condition_true(conditions: &[Condition], condition_type: &str) -> bool {
    find_condition(conditions, condition_type).is_some_and(Condition::is_true)
}

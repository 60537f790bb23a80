//! Timeline flag derivation for the verification pipeline.
//!
//! Completion is positional: an entry is done when its status sits earlier
//! on the pipeline than the asset's current status. Positions come from
//! `VerificationStatus::pipeline_position`, so entry order in the input does
//! not matter and a status outside the pipeline marks nothing.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use crate::components::timeline::TimelineEvent;
use crate::state::asset::{VerificationStatus, VerificationTimeline};

/// Completed/current flags for one entry given the asset's current status.
pub fn entry_flags(entry: VerificationStatus, current: VerificationStatus) -> (bool, bool) {
    match (entry.pipeline_position(), current.pipeline_position()) {
        (Some(entry_pos), Some(current_pos)) => (entry_pos < current_pos, entry_pos == current_pos),
        _ => (false, false),
    }
}

/// Project recorded history into renderable timeline rows.
pub fn build_timeline(entries: &[VerificationTimeline], current: VerificationStatus) -> Vec<TimelineEvent> {
    entries
        .iter()
        .map(|entry| {
            let (is_completed, is_current) = entry_flags(entry.status, current);
            TimelineEvent {
                key: entry.status.as_str().to_owned(),
                label: entry.description.clone(),
                timestamp: Some(entry.timestamp.clone()).filter(|t| !t.is_empty()),
                description: entry.completed_by.as_ref().map(|who| format!("Completed by: {who}")),
                is_completed,
                is_current,
            }
        })
        .collect()
}

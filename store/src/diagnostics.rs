//! Diagnostic channel for absorbed fetch failures.
//!
//! Public store operations never return errors; the reason for each absorbed
//! failure is recorded here (and mirrored to the log) so callers can still
//! tell "empty" from "failed" when they need to.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use govlens_types::ProposalId;

/// How many failure records are retained before the oldest is dropped.
const CAPACITY: usize = 256;

/// One absorbed failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchFailure {
    /// Which operation failed ("proposals", "tally", "voter_vote", ...).
    pub operation: &'static str,
    /// The proposal involved, when the failure is per-item.
    pub proposal_id: Option<ProposalId>,
    /// Failure reason as reported at the collaborator boundary.
    pub reason: String,
}

impl FetchFailure {
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            proposal_id: None,
            reason: reason.into(),
        }
    }

    pub fn for_proposal(
        operation: &'static str,
        proposal_id: ProposalId,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            proposal_id: Some(proposal_id),
            reason: reason.into(),
        }
    }
}

/// Bounded ring of recent absorbed failures.
#[derive(Default)]
pub struct Diagnostics {
    entries: Mutex<VecDeque<FetchFailure>>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absorbed failure, evicting the oldest past capacity.
    pub fn record(&self, failure: FetchFailure) {
        tracing::warn!(
            operation = failure.operation,
            proposal = failure
                .proposal_id
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or("-"),
            reason = %failure.reason,
            "governance fetch failure absorbed"
        );
        let mut entries = self.lock();
        if entries.len() == CAPACITY {
            entries.pop_front();
        }
        entries.push_back(failure);
    }

    /// Recorded failures, oldest first.
    pub fn recent(&self) -> Vec<FetchFailure> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<FetchFailure>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_reason() {
        let diagnostics = Diagnostics::new();
        diagnostics.record(FetchFailure::for_proposal(
            "tally",
            "12".into(),
            "HTTP status 502",
        ));
        let recent = diagnostics.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].operation, "tally");
        assert_eq!(recent[0].proposal_id.as_ref().unwrap().as_str(), "12");
        assert_eq!(recent[0].reason, "HTTP status 502");
    }

    #[test]
    fn test_ring_evicts_oldest_past_capacity() {
        let diagnostics = Diagnostics::new();
        for i in 0..(CAPACITY + 10) {
            diagnostics.record(FetchFailure::new("proposals", format!("failure {i}")));
        }
        let recent = diagnostics.recent();
        assert_eq!(recent.len(), CAPACITY);
        assert_eq!(recent[0].reason, "failure 10");
        assert_eq!(recent.last().unwrap().reason, format!("failure {}", CAPACITY + 9));
    }

    #[test]
    fn test_clear_empties_the_ring() {
        let diagnostics = Diagnostics::new();
        diagnostics.record(FetchFailure::new("params", "timeout"));
        assert!(!diagnostics.is_empty());
        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }
}

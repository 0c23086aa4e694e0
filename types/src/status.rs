//! Proposal lifecycle statuses.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a governance proposal.
///
/// List endpoints filter by a numeric status-code string; "2" (voting period)
/// is the code an explorer polls by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Unknown or unset status.
    #[default]
    #[serde(rename = "PROPOSAL_STATUS_UNSPECIFIED")]
    Unspecified,
    /// Collecting deposits toward the minimum deposit.
    #[serde(rename = "PROPOSAL_STATUS_DEPOSIT_PERIOD")]
    DepositPeriod,
    /// Open for voting.
    #[serde(rename = "PROPOSAL_STATUS_VOTING_PERIOD")]
    VotingPeriod,
    /// Voting ended with the proposal accepted.
    #[serde(rename = "PROPOSAL_STATUS_PASSED")]
    Passed,
    /// Voting ended with the proposal rejected.
    #[serde(rename = "PROPOSAL_STATUS_REJECTED")]
    Rejected,
    /// The proposal passed but its execution failed.
    #[serde(rename = "PROPOSAL_STATUS_FAILED")]
    Failed,
}

impl ProposalStatus {
    /// Numeric status code as used in list query parameters.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::Unspecified => "0",
            Self::DepositPeriod => "1",
            Self::VotingPeriod => "2",
            Self::Passed => "3",
            Self::Rejected => "4",
            Self::Failed => "5",
        }
    }

    /// Parse a numeric status code. Unknown codes map to `Unspecified`.
    pub fn from_status_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::DepositPeriod,
            "2" => Self::VotingPeriod,
            "3" => Self::Passed,
            "4" => Self::Rejected,
            "5" => Self::Failed,
            _ => Self::Unspecified,
        }
    }
}

//! Votes, vote options, and deposits.

use serde::{Deserialize, Serialize};

use crate::pagination::PageResponse;
use crate::params::Coin;
use crate::proposal::ProposalId;

/// A voter's chosen option, named as on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    #[default]
    #[serde(rename = "VOTE_OPTION_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "VOTE_OPTION_YES")]
    Yes,
    #[serde(rename = "VOTE_OPTION_ABSTAIN")]
    Abstain,
    #[serde(rename = "VOTE_OPTION_NO")]
    No,
    #[serde(rename = "VOTE_OPTION_NO_WITH_VETO")]
    NoWithVeto,
}

impl VoteOption {
    /// Placeholder attached when the viewer's vote cannot be determined
    /// (no wallet connected, lookup failed, or option unset).
    pub const SENTINEL: VoteOption = VoteOption::NoWithVeto;

    /// Wire-format name of this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "VOTE_OPTION_UNSPECIFIED",
            Self::Yes => "VOTE_OPTION_YES",
            Self::Abstain => "VOTE_OPTION_ABSTAIN",
            Self::No => "VOTE_OPTION_NO",
            Self::NoWithVeto => "VOTE_OPTION_NO_WITH_VETO",
        }
    }
}

/// A single recorded vote.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vote {
    #[serde(default)]
    pub proposal_id: ProposalId,
    #[serde(default)]
    pub voter: String,
    #[serde(default)]
    pub option: VoteOption,
}

/// Paged list of votes for a proposal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoteList {
    #[serde(default)]
    pub votes: Vec<Vote>,
    #[serde(default)]
    pub pagination: PageResponse,
}

/// A deposit made toward a proposal's minimum deposit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deposit {
    #[serde(default)]
    pub proposal_id: ProposalId,
    #[serde(default)]
    pub depositor: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

/// Paged list of deposits for a proposal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DepositList {
    #[serde(default)]
    pub deposits: Vec<Deposit>,
    #[serde(default)]
    pub pagination: PageResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_option_wire_names() {
        let option: VoteOption = serde_json::from_str(r#""VOTE_OPTION_YES""#).unwrap();
        assert_eq!(option, VoteOption::Yes);
        assert_eq!(option.as_str(), "VOTE_OPTION_YES");
    }

    #[test]
    fn test_sentinel_is_no_with_veto() {
        assert_eq!(VoteOption::SENTINEL, VoteOption::NoWithVeto);
        assert_eq!(VoteOption::SENTINEL.as_str(), "VOTE_OPTION_NO_WITH_VETO");
    }

    #[test]
    fn test_vote_deserialization() {
        let json = r#"{"proposal_id":"9","voter":"addr1","option":"VOTE_OPTION_ABSTAIN"}"#;
        let vote: Vote = serde_json::from_str(json).unwrap();
        assert_eq!(vote.proposal_id.as_str(), "9");
        assert_eq!(vote.option, VoteOption::Abstain);
    }

    #[test]
    fn test_vote_with_missing_option_defaults_to_unspecified() {
        let vote: Vote = serde_json::from_str(r#"{"proposal_id":"9","voter":"addr1"}"#).unwrap();
        assert_eq!(vote.option, VoteOption::Unspecified);
    }
}

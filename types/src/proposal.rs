//! Governance proposals as served by the node, plus client-side enrichment
//! fields attached by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pagination::PageResponse;
use crate::params::Coin;
use crate::status::ProposalStatus;
use crate::tally::Tally;
use crate::vote::VoteOption;

/// A governance proposal identifier (decimal string on the wire).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalId(String);

impl ProposalId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProposalId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Structured proposal content (the newer governance API shape).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type URL of the wrapped content message, when present.
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,
}

/// A governance proposal.
///
/// `final_tally_result` and `voter_status` are enrichment fields: `None` as
/// fetched, filled in asynchronously by the store for voting-period pages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(default)]
    pub proposal_id: ProposalId,
    #[serde(default)]
    pub content: Option<ProposalContent>,
    /// Legacy top-level title used by older gov API versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub status: ProposalStatus,
    #[serde(default)]
    pub final_tally_result: Option<Tally>,
    /// The current viewer's vote on this proposal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter_status: Option<VoteOption>,
    #[serde(default)]
    pub submit_time: Option<String>,
    #[serde(default)]
    pub deposit_end_time: Option<String>,
    #[serde(default)]
    pub voting_start_time: Option<String>,
    #[serde(default)]
    pub voting_end_time: Option<String>,
    #[serde(default)]
    pub total_deposit: Vec<Coin>,
}

impl Proposal {
    /// Display title: structured content first, then the legacy top-level
    /// field, else empty.
    pub fn resolved_title(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.title.as_deref())
            .or(self.title.as_deref())
            .unwrap_or("")
    }
}

/// One fetched page of proposals.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalPage {
    #[serde(default)]
    pub proposals: Vec<Proposal>,
    #[serde(default)]
    pub pagination: PageResponse,
}

impl ProposalPage {
    /// The page returned when the RPC collaborator is absent or failed.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal_json(content_title: Option<&str>, legacy_title: Option<&str>) -> String {
        let content = match content_title {
            Some(t) => format!(r#","content":{{"title":"{t}"}}"#),
            None => String::new(),
        };
        let legacy = match legacy_title {
            Some(t) => format!(r#","title":"{t}""#),
            None => String::new(),
        };
        format!(
            r#"{{"proposal_id":"42","status":"PROPOSAL_STATUS_VOTING_PERIOD"{content}{legacy}}}"#
        )
    }

    #[test]
    fn test_resolved_title_prefers_structured_content() {
        let proposal: Proposal =
            serde_json::from_str(&proposal_json(Some("Upgrade v5"), Some("old name"))).unwrap();
        assert_eq!(proposal.resolved_title(), "Upgrade v5");
    }

    #[test]
    fn test_resolved_title_falls_back_to_legacy_field() {
        let proposal: Proposal =
            serde_json::from_str(&proposal_json(None, Some("Community pool spend"))).unwrap();
        assert_eq!(proposal.resolved_title(), "Community pool spend");
    }

    #[test]
    fn test_resolved_title_empty_when_both_absent() {
        let proposal: Proposal = serde_json::from_str(&proposal_json(None, None)).unwrap();
        assert_eq!(proposal.resolved_title(), "");
    }

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "proposals": [
                {"proposal_id":"1","content":{"title":"First","description":"d"},
                 "status":"PROPOSAL_STATUS_PASSED",
                 "total_deposit":[{"denom":"uatom","amount":"1000000"}]}
            ],
            "pagination": {"next_key":"abc=","total":"12"}
        }"#;
        let page: ProposalPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.proposals.len(), 1);
        assert_eq!(page.proposals[0].proposal_id.as_str(), "1");
        assert_eq!(page.proposals[0].status, ProposalStatus::Passed);
        assert!(page.proposals[0].final_tally_result.is_none());
        assert_eq!(page.pagination.next_key.as_deref(), Some("abc="));
    }
}

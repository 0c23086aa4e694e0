//! Governance RPC trait and its reqwest-backed implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use govlens_types::{
    DepositList, DepositParams, PageRequest, Proposal, ProposalId, ProposalPage, ProposalStatus,
    Tally, Vote, VoteList,
};

use crate::error::RpcError;
use crate::pagination::page_query;

/// Default timeout for governance queries.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Base path of the governance REST API.
const GOV_API_PREFIX: &str = "/cosmos/gov/v1beta1";

/// Operations the store needs from a node's governance API.
#[async_trait]
pub trait GovRpc: Send + Sync {
    /// Page of proposals in the given lifecycle status.
    async fn get_gov_proposals(
        &self,
        status: ProposalStatus,
        page: Option<&PageRequest>,
    ) -> Result<ProposalPage, RpcError>;

    /// Deposit-period parameters of the governance module.
    async fn get_gov_params_deposit(&self) -> Result<DepositParams, RpcError>;

    /// Current tally for one proposal.
    async fn get_gov_proposal_tally(&self, proposal_id: &ProposalId) -> Result<Tally, RpcError>;

    /// A single proposal by id.
    async fn get_gov_proposal(&self, proposal_id: &ProposalId) -> Result<Proposal, RpcError>;

    /// Deposits made toward a proposal.
    async fn get_gov_proposal_deposits(
        &self,
        proposal_id: &ProposalId,
        page: Option<&PageRequest>,
    ) -> Result<DepositList, RpcError>;

    /// Votes cast on a proposal.
    async fn get_gov_proposal_votes(
        &self,
        proposal_id: &ProposalId,
        page: Option<&PageRequest>,
    ) -> Result<VoteList, RpcError>;

    /// One voter's vote on a proposal.
    async fn get_gov_proposal_votes_voter(
        &self,
        proposal_id: &ProposalId,
        voter: &str,
    ) -> Result<Vote, RpcError>;
}

// ── Wire wrappers ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParamsResponse {
    deposit_params: DepositParams,
}

#[derive(Deserialize)]
struct TallyResponse {
    tally: Tally,
}

#[derive(Deserialize)]
struct ProposalResponse {
    proposal: Proposal,
}

#[derive(Deserialize)]
struct VoteResponse {
    vote: Vote,
}

// ── HTTP implementation ──────────────────────────────────────────────────

/// HTTP client for the node's governance endpoints.
///
/// Wraps a pooled `reqwest::Client` with the node's base URL.
#[derive(Clone)]
pub struct HttpGovRpc {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGovRpc {
    /// Create a client targeting the given REST base URL
    /// (e.g. `https://rest.cosmos.directory/cosmoshub`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RpcError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| RpcError::RequestFailed(format!("failed to build HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, GOV_API_PREFIX, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<T, RpcError> {
        tracing::debug!(%url, "governance query");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RpcError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    RpcError::Unreachable(format!("connection failed: {e}"))
                } else {
                    RpcError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RpcError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(RpcError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| RpcError::InvalidResponse(format!("failed to parse response body: {e}")))
    }
}

#[async_trait]
impl GovRpc for HttpGovRpc {
    async fn get_gov_proposals(
        &self,
        status: ProposalStatus,
        page: Option<&PageRequest>,
    ) -> Result<ProposalPage, RpcError> {
        let url = self.endpoint("/proposals");
        let mut query = vec![(
            "proposal_status".to_string(),
            status.status_code().to_string(),
        )];
        query.extend(page_query(page));
        self.get_json(&url, &query).await
    }

    async fn get_gov_params_deposit(&self) -> Result<DepositParams, RpcError> {
        let url = self.endpoint("/params/deposit");
        let response: ParamsResponse = self.get_json(&url, &[]).await?;
        Ok(response.deposit_params)
    }

    async fn get_gov_proposal_tally(&self, proposal_id: &ProposalId) -> Result<Tally, RpcError> {
        let url = self.endpoint(&format!("/proposals/{proposal_id}/tally"));
        let response: TallyResponse = self.get_json(&url, &[]).await?;
        Ok(response.tally)
    }

    async fn get_gov_proposal(&self, proposal_id: &ProposalId) -> Result<Proposal, RpcError> {
        let url = self.endpoint(&format!("/proposals/{proposal_id}"));
        let response: ProposalResponse = self.get_json(&url, &[]).await?;
        Ok(response.proposal)
    }

    async fn get_gov_proposal_deposits(
        &self,
        proposal_id: &ProposalId,
        page: Option<&PageRequest>,
    ) -> Result<DepositList, RpcError> {
        let url = self.endpoint(&format!("/proposals/{proposal_id}/deposits"));
        self.get_json(&url, &page_query(page)).await
    }

    async fn get_gov_proposal_votes(
        &self,
        proposal_id: &ProposalId,
        page: Option<&PageRequest>,
    ) -> Result<VoteList, RpcError> {
        let url = self.endpoint(&format!("/proposals/{proposal_id}/votes"));
        self.get_json(&url, &page_query(page)).await
    }

    async fn get_gov_proposal_votes_voter(
        &self,
        proposal_id: &ProposalId,
        voter: &str,
    ) -> Result<Vote, RpcError> {
        let url = self.endpoint(&format!("/proposals/{proposal_id}/votes/{voter}"));
        let response: VoteResponse = self.get_json(&url, &[]).await?;
        Ok(response.vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govlens_types::VoteOption;

    #[test]
    fn test_endpoint_formatting_strips_trailing_slash() {
        let client = HttpGovRpc::new("http://localhost:1317/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1317");
        assert_eq!(
            client.endpoint("/proposals"),
            "http://localhost:1317/cosmos/gov/v1beta1/proposals"
        );
    }

    #[test]
    fn test_proposal_path_includes_id() {
        let client = HttpGovRpc::new("http://localhost:1317").unwrap();
        let id = ProposalId::from("87");
        assert_eq!(
            client.endpoint(&format!("/proposals/{id}/tally")),
            "http://localhost:1317/cosmos/gov/v1beta1/proposals/87/tally"
        );
    }

    #[test]
    fn test_params_response_unwraps_deposit_params() {
        let json = r#"{
            "deposit_params": {
                "min_deposit": [{"denom":"uatom","amount":"64000000"}],
                "max_deposit_period": "1209600s"
            },
            "voting_params": {"voting_period": "1209600s"},
            "tally_params": {"quorum": "0.4"}
        }"#;
        let response: ParamsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.deposit_params.min_deposit[0].amount, "64000000");
    }

    #[test]
    fn test_tally_response_shape() {
        let json = r#"{"tally":{"yes":"10","abstain":"2","no":"1","no_with_veto":"0"}}"#;
        let response: TallyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.tally.yes, "10");
    }

    #[test]
    fn test_vote_response_shape() {
        let json = r#"{"vote":{"proposal_id":"5","voter":"addr1","option":"VOTE_OPTION_YES"}}"#;
        let response: VoteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.vote.option, VoteOption::Yes);
    }

    #[test]
    fn test_proposal_response_shape() {
        let json = r#"{"proposal":{"proposal_id":"5","content":{"title":"t"},
            "status":"PROPOSAL_STATUS_VOTING_PERIOD"}}"#;
        let response: ProposalResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.proposal.resolved_title(), "t");
    }
}

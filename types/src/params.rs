//! Governance-module parameters.

use serde::{Deserialize, Serialize};

/// A token amount with denomination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Deposit-period parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositParams {
    #[serde(default)]
    pub min_deposit: Vec<Coin>,
    /// Duration string, e.g. `"1209600s"`.
    #[serde(default)]
    pub max_deposit_period: Option<String>,
}

/// Voting-period parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingParams {
    #[serde(default)]
    pub voting_period: Option<String>,
}

/// Tally thresholds (decimal fraction strings).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyParams {
    #[serde(default)]
    pub quorum: Option<String>,
    #[serde(default)]
    pub threshold: Option<String>,
    #[serde(default)]
    pub veto_threshold: Option<String>,
}

/// Snapshot of the chain's governance parameters.
///
/// Only the deposit category is refreshed by the store's parameter fetch;
/// the voting and tally slots are declared but stay at their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovParams {
    #[serde(default)]
    pub deposit: DepositParams,
    #[serde(default)]
    pub voting: VotingParams,
    #[serde(default)]
    pub tally: TallyParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_params_deserialization() {
        let json = r#"{
            "min_deposit": [{"denom":"uatom","amount":"64000000"}],
            "max_deposit_period": "1209600s"
        }"#;
        let params: DepositParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.min_deposit.len(), 1);
        assert_eq!(params.min_deposit[0].denom, "uatom");
        assert_eq!(params.max_deposit_period.as_deref(), Some("1209600s"));
    }

    #[test]
    fn test_gov_params_default_is_empty() {
        let params = GovParams::default();
        assert!(params.deposit.min_deposit.is_empty());
        assert!(params.voting.voting_period.is_none());
        assert!(params.tally.quorum.is_none());
    }
}

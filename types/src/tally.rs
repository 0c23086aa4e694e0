//! Aggregated vote-weight tallies.

use serde::{Deserialize, Serialize};

/// Aggregated vote-weight counters for one proposal.
///
/// Counters are decimal strings on the wire; vote weights routinely exceed
/// what fits in a u64, and the explorer never does arithmetic on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    #[serde(default = "zero_count")]
    pub yes: String,
    #[serde(default = "zero_count")]
    pub abstain: String,
    #[serde(default = "zero_count")]
    pub no: String,
    #[serde(default = "zero_count")]
    pub no_with_veto: String,
}

fn zero_count() -> String {
    "0".to_string()
}

impl Tally {
    /// The all-zero placeholder attached when a tally fetch fails.
    pub fn zero() -> Self {
        Self {
            yes: zero_count(),
            abstain: zero_count(),
            no: zero_count(),
            no_with_veto: zero_count(),
        }
    }

    /// Whether every counter is zero.
    pub fn is_zero(&self) -> bool {
        [&self.yes, &self.abstain, &self.no, &self.no_with_veto]
            .iter()
            .all(|c| c.as_str() == "0")
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_tally() {
        let tally = Tally::zero();
        assert!(tally.is_zero());
        assert_eq!(tally.yes, "0");
    }

    #[test]
    fn test_wire_deserialization() {
        let json = r#"{"yes":"123000000","abstain":"0","no":"42","no_with_veto":"7"}"#;
        let tally: Tally = serde_json::from_str(json).unwrap();
        assert_eq!(tally.yes, "123000000");
        assert_eq!(tally.no_with_veto, "7");
        assert!(!tally.is_zero());
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let tally: Tally = serde_json::from_str(r#"{"yes":"5"}"#).unwrap();
        assert_eq!(tally.abstain, "0");
        assert_eq!(tally.no, "0");
    }
}

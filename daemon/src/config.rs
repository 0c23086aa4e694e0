//! Daemon configuration with TOML file support.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use govlens_types::PageRequest;

/// Configuration for the GovLens daemon.
///
/// Loaded from a TOML file via [`Config::from_toml_file`] or built from
/// defaults; CLI flags and environment variables override file values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the node's REST endpoint.
    #[serde(default = "default_node_url")]
    pub node_url: String,

    /// Viewer address used for per-proposal vote lookups.
    #[serde(default)]
    pub voter: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Page size for proposal listings.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_node_url() -> String {
    "http://127.0.0.1:1317".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_limit() -> u32 {
    50
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            voter: None,
            request_timeout_secs: default_timeout_secs(),
            page_limit: default_page_limit(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn page_request(&self) -> Option<PageRequest> {
        Some(PageRequest::with_limit(self.page_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.node_url, "http://127.0.0.1:1317");
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.log_format, "human");
        assert!(config.voter.is_none());
    }

    #[test]
    fn test_from_toml_file_with_partial_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
node_url = "https://rest.example.org"
voter = "cosmos1viewer"
log_format = "json"
"#
        )
        .unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.node_url, "https://rest.example.org");
        assert_eq!(config.voter.as_deref(), Some("cosmos1viewer"));
        assert_eq!(config.log_format, "json");
        // unspecified keys fall back to defaults
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.page_limit, 50);
    }

    #[test]
    fn test_from_toml_file_missing_file_errors() {
        assert!(Config::from_toml_file(Path::new("/nonexistent/govlens.toml")).is_err());
    }
}

//! GovLens daemon — one-shot governance fetch against a configured node.
//!
//! Fetches governance parameters and a page of proposals, waits for tally and
//! viewer-vote enrichment to settle, and prints a summary. Fetch failures are
//! absorbed into empty results (and reported), so the process exits 0 either
//! way.

mod config;
mod logging;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use govlens_rpc::HttpGovRpc;
use govlens_store::{GovStore, SessionWallet};
use govlens_types::ProposalStatus;

use config::Config;
use logging::{init_logging, LogFormat};

#[derive(Parser)]
#[command(
    name = "govlens-daemon",
    about = "Governance data fetcher for chain explorers"
)]
struct Cli {
    /// Base URL of the node's REST endpoint.
    #[arg(long, env = "GOVLENS_NODE_URL")]
    node_url: Option<String>,

    /// Viewer address used for per-proposal vote lookups.
    #[arg(long, env = "GOVLENS_VOTER")]
    voter: Option<String>,

    /// Proposal status code to fetch ("1".."5"; "2" is the voting period).
    #[arg(long, default_value = "2", env = "GOVLENS_STATUS")]
    status: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GOVLENS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GOVLENS_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are the
    /// base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    if let Some(node_url) = cli.node_url {
        config.node_url = node_url;
    }
    if let Some(voter) = cli.voter {
        config.voter = Some(voter);
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }
    if let Some(log_format) = cli.log_format {
        config.log_format = log_format;
    }

    init_logging(LogFormat::from_config(&config.log_format), &config.log_level);

    let status = ProposalStatus::from_status_code(&cli.status);

    let rpc = HttpGovRpc::with_timeout(&config.node_url, config.request_timeout())?;
    let wallet = Arc::new(SessionWallet::new());
    if let Some(voter) = &config.voter {
        wallet.connect(voter.clone());
    }

    let store = GovStore::with_rpc(Arc::new(rpc), wallet);

    tracing::info!(
        node = %config.node_url,
        status = status.status_code(),
        "fetching governance state"
    );
    store.fetch_params().await;
    let page = store.fetch_proposals(status, config.page_request()).await;
    store.settle_enrichment().await;

    let params = store.params();
    if !params.deposit.min_deposit.is_empty() {
        let min = &params.deposit.min_deposit[0];
        tracing::info!(
            min_deposit = %format!("{}{}", min.amount, min.denom),
            "deposit parameters loaded"
        );
    }

    let snapshot = page.snapshot();
    println!(
        "{} proposal(s) in status {}",
        snapshot.proposals.len(),
        status.status_code()
    );
    for proposal in &snapshot.proposals {
        let tally = proposal
            .final_tally_result
            .as_ref()
            .map(|t| format!("yes={} no={} veto={} abstain={}", t.yes, t.no, t.no_with_veto, t.abstain))
            .unwrap_or_else(|| "-".to_string());
        let voted = proposal
            .voter_status
            .map(|option| option.as_str())
            .unwrap_or("-");
        println!(
            "  #{}  {}  [{}]  viewer: {}",
            proposal.proposal_id,
            proposal.resolved_title(),
            tally,
            voted
        );
    }

    let failures = store.diagnostics().recent();
    if !failures.is_empty() {
        println!(
            "{} fetch failure(s) absorbed; see the log for details",
            failures.len()
        );
    }

    Ok(())
}

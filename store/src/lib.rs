//! Caching store and enrichment orchestrator for governance data.
//!
//! [`GovStore`] owns per-status proposal pages, loading flags, and a
//! parameter snapshot. Fetches go through a [`govlens_rpc::GovRpc`]
//! collaborator and never fail outward: failures become default values, with
//! the reason preserved on the store's [`Diagnostics`] channel.

pub mod diagnostics;
pub mod gov;
pub mod loading;
pub mod wallet;

pub use diagnostics::{Diagnostics, FetchFailure};
pub use gov::{GovStore, ProposalSlot, StoredPage};
pub use loading::LoadingStatus;
pub use wallet::{SessionWallet, WalletContext};

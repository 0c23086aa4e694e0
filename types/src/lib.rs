//! Governance domain types for GovLens.
//!
//! This crate defines the types shared by the RPC client and the store:
//! proposals, lifecycle statuses, vote options, tallies, pagination shapes,
//! and governance-module parameters. All types mirror the JSON served by a
//! node's governance REST API.

pub mod pagination;
pub mod params;
pub mod proposal;
pub mod status;
pub mod tally;
pub mod vote;

pub use pagination::{PageRequest, PageResponse};
pub use params::{Coin, DepositParams, GovParams, TallyParams, VotingParams};
pub use proposal::{Proposal, ProposalContent, ProposalId, ProposalPage};
pub use status::ProposalStatus;
pub use tally::Tally;
pub use vote::{Deposit, DepositList, Vote, VoteList, VoteOption};

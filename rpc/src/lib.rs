//! HTTP client for a node's governance REST endpoints.
//!
//! [`GovRpc`] is the seam the store depends on; [`HttpGovRpc`] is the
//! production implementation over a pooled `reqwest` client. Tests and
//! tooling can substitute any other implementation of the trait.

pub mod client;
pub mod error;
pub mod pagination;

pub use client::{GovRpc, HttpGovRpc};
pub use error::RpcError;

//! RPC client error types.

use thiserror::Error;

/// Errors from the governance RPC client.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The node could not be reached (connection failure or timeout).
    #[error("node unreachable: {0}")]
    Unreachable(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

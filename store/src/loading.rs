//! Per-status loading flags.

/// Loading state of one status bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    /// No fetch has been requested for this key yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed, successfully or not.
    Loaded,
}

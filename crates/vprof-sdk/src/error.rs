//! Error types for the host ABI

use crate::handle::FunctionHandle;

/// Result type for host calls
pub type HostResult<T> = Result<T, HostError>;

/// Host-runtime error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// Handle no longer resolves (the host reclaimed the function)
    #[error("Stale handle: {0} no longer resolves")]
    StaleHandle(FunctionHandle),

    /// Class not known to the host
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// Invalid argument
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// The host has no sampling engine available
    #[error("Sampling unavailable: {0}")]
    SamplingUnavailable(String),

    /// Sampling was started while already in progress
    #[error("Sampling already in progress")]
    AlreadySampling,

    /// Sampling was stopped while not in progress
    #[error("Sampling not in progress")]
    NotSampling,
}

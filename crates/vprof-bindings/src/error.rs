//! Error types for the profiler bindings

use thiserror::Error;
use vprof_sdk::HostError;

/// Errors from profiler binding operations
#[derive(Debug, Error)]
pub enum ProfilerError {
    /// The host runtime rejected an operation
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// The profiler was started while already profiling
    #[error("Profiler is already started")]
    AlreadyProfiling,

    /// The profiler was stopped while idle
    #[error("Profiler is not started")]
    NotProfiling,
}

//! HostContext trait — abstract host-runtime operations
//!
//! Defines the interface a host embedding implements. Profiler extensions
//! program against this trait without depending on engine internals; tests
//! implement it over a mock host.

use crate::error::HostResult;
use crate::handle::{FunctionHandle, ObjectRef};
use crate::isolate::IsolateId;
use crate::profile::RawTimeProfile;
use crate::value::HostValue;

/// Abstract host-runtime context for native extensions.
///
/// One context serves one isolate. The host constrains extension code that
/// goes through a context to that isolate's single logical thread of
/// control, so implementations do not need to support cross-isolate calls.
pub trait HostContext {
    // ========================================================================
    // Identity
    // ========================================================================

    /// Identity of the isolate this context serves
    fn isolate(&self) -> IsolateId;

    // ========================================================================
    // Class Operations
    // ========================================================================

    /// Define a class with the given instance fields, returning a non-owning
    /// handle to its constructor.
    ///
    /// The host owns the constructor and may reclaim it at any point;
    /// operations through a reclaimed handle fail with
    /// [`HostError::StaleHandle`](crate::HostError::StaleHandle).
    fn define_class(&self, name: &str, field_names: &[&str]) -> HostResult<FunctionHandle>;

    /// Check whether a constructor handle still resolves
    fn is_live(&self, constructor: FunctionHandle) -> bool;

    /// Instantiate an object through a constructor handle, one argument per
    /// declared field
    fn construct(&self, constructor: FunctionHandle, args: &[HostValue]) -> HostResult<ObjectRef>;

    // ========================================================================
    // Sampling Engine
    // ========================================================================

    /// Start the host's sampling engine at the given interval
    fn start_sampling(&self, interval_micros: u64) -> HostResult<()>;

    /// Stop the host's sampling engine and take the collected profile
    fn stop_sampling(&self) -> HostResult<RawTimeProfile>;
}

//! vprof-bindings — per-isolate constructor cache and time-profiler bindings
//!
//! This crate is the native profiler extension built on `vprof-sdk`. Its
//! core is the per-isolate registry: each isolate caches the constructor
//! handles for the CpuProfiler, Location, and Sample classes so each
//! constructor is created once per isolate and reused for every later object
//! construction.
//!
//! The host runtime owns the constructors; the registry holds non-owning
//! handles whose lifetime is bounded by the isolate's. On isolate teardown
//! the host calls [`PerIsolateData::dispose`] to drop the cache.

#![warn(missing_docs)]

pub mod classes;
pub mod error;
pub mod per_isolate;
pub mod time_profiler;

pub use error::ProfilerError;
pub use per_isolate::{ConstructorSlot, PerIsolateData};
pub use time_profiler::{TimeProfile, TimeProfiler, TimeProfilerOptions};

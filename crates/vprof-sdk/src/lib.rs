//! vprof SDK - Lightweight SDK for writing native profiler extensions
//!
//! This crate provides the minimal types and traits needed to write a
//! profiler extension against a vprof host runtime without depending on a
//! concrete engine. The host runtime owns every constructor function and
//! object instance, including their garbage collection; extensions hold
//! non-owning handles and perform all operations through the [`HostContext`]
//! trait, which the embedding implements.
//!
//! # Example
//!
//! ```ignore
//! use vprof_sdk::{HostContext, HostResult};
//!
//! fn setup(host: &dyn HostContext) -> HostResult<()> {
//!     let ctor = host.define_class("Location", &["functionName", "lineNumber"])?;
//!     let _obj = host.construct(ctor, &[])?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod handle;
pub mod isolate;
pub mod profile;
pub mod value;

pub use context::HostContext;
pub use error::{HostError, HostResult};
pub use handle::{FunctionHandle, ObjectRef};
pub use isolate::IsolateId;
pub use profile::{RawFrame, RawSample, RawTimeProfile};
pub use value::HostValue;

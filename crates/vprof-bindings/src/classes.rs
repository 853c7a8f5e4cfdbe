//! Class registration for the profiler extension
//!
//! Defines the CpuProfiler, Location, and Sample classes with the host and
//! caches their constructor handles in the isolate's [`PerIsolateData`].
//! Object construction fetches the cached handle instead of re-creating the
//! constructor on every call; if a slot is still empty it is populated on
//! first use.

use vprof_sdk::{FunctionHandle, HostContext, HostValue, ObjectRef, RawFrame};

use crate::error::ProfilerError;
use crate::per_isolate::PerIsolateData;

/// Field layout of the CpuProfiler class
const CPU_PROFILER_FIELDS: &[&str] = &["intervalMicros"];

/// Field layout of the Location class
const LOCATION_FIELDS: &[&str] = &["functionName", "scriptName", "lineNumber", "columnNumber"];

/// Field layout of the Sample class
const SAMPLE_FIELDS: &[&str] = &["locations", "hitCount", "timestampMicros"];

fn cpu_profiler_handle(host: &dyn HostContext) -> Result<FunctionHandle, ProfilerError> {
    let data = PerIsolateData::for_isolate(host.isolate());
    let handle = data
        .cpu_profiler_constructor()
        .get_or_try_init(|| host.define_class("CpuProfiler", CPU_PROFILER_FIELDS))?;
    Ok(handle)
}

fn location_handle(host: &dyn HostContext) -> Result<FunctionHandle, ProfilerError> {
    let data = PerIsolateData::for_isolate(host.isolate());
    let handle = data
        .location_constructor()
        .get_or_try_init(|| host.define_class("Location", LOCATION_FIELDS))?;
    Ok(handle)
}

fn sample_handle(host: &dyn HostContext) -> Result<FunctionHandle, ProfilerError> {
    let data = PerIsolateData::for_isolate(host.isolate());
    let handle = data
        .sample_constructor()
        .get_or_try_init(|| host.define_class("Sample", SAMPLE_FIELDS))?;
    Ok(handle)
}

/// Define all three profiler classes for the host's isolate
///
/// Idempotent: slots already populated are left untouched, so each class is
/// defined at most once per isolate.
pub fn ensure_profiler_classes(host: &dyn HostContext) -> Result<(), ProfilerError> {
    cpu_profiler_handle(host)?;
    location_handle(host)?;
    sample_handle(host)?;
    Ok(())
}

/// Construct a CpuProfiler object through the cached constructor
pub fn new_cpu_profiler(
    host: &dyn HostContext,
    interval_micros: u64,
) -> Result<ObjectRef, ProfilerError> {
    let ctor = cpu_profiler_handle(host)?;
    let obj = host.construct(ctor, &[HostValue::Int(interval_micros as i64)])?;
    Ok(obj)
}

/// Construct a Location object from a raw frame through the cached constructor
pub fn new_location(host: &dyn HostContext, frame: &RawFrame) -> Result<ObjectRef, ProfilerError> {
    let ctor = location_handle(host)?;
    let obj = host.construct(
        ctor,
        &[
            HostValue::Str(frame.function_name.clone()),
            HostValue::Str(frame.script_name.clone()),
            HostValue::Int(frame.line as i64),
            HostValue::Int(frame.column as i64),
        ],
    )?;
    Ok(obj)
}

/// Construct a Sample object from already-built Location objects through the
/// cached constructor
pub fn new_sample(
    host: &dyn HostContext,
    locations: Vec<ObjectRef>,
    hit_count: u64,
    timestamp_micros: u64,
) -> Result<ObjectRef, ProfilerError> {
    let ctor = sample_handle(host)?;
    let locations = locations.into_iter().map(HostValue::Object).collect();
    let obj = host.construct(
        ctor,
        &[
            HostValue::Array(locations),
            HostValue::Int(hit_count as i64),
            HostValue::Int(timestamp_micros as i64),
        ],
    )?;
    Ok(obj)
}

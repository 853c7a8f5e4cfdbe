//! Time profiler binding lifecycle
//!
//! Drives the host's sampling engine and assembles profiles from the raw
//! samples it returns. Sampling itself is entirely the host's job; this
//! binding only owns the start/stop/restart state machine and the
//! conversion of raw samples into Location and Sample host objects via the
//! per-isolate constructor cache.

use vprof_sdk::{HostContext, ObjectRef, RawTimeProfile};

use crate::classes;
use crate::error::ProfilerError;

/// Options for the time profiler
#[derive(Debug, Clone)]
pub struct TimeProfilerOptions {
    /// Sampling interval in microseconds
    pub interval_micros: u64,
}

impl Default for TimeProfilerOptions {
    fn default() -> Self {
        Self {
            interval_micros: 1000,
        }
    }
}

impl TimeProfilerOptions {
    /// Create options with a specific sampling interval
    pub fn with_interval_micros(interval_micros: u64) -> Self {
        Self { interval_micros }
    }
}

/// A profile assembled from host samples via the cached constructors
#[derive(Debug)]
pub struct TimeProfile {
    /// When sampling started, in microseconds
    pub start_time_micros: u64,
    /// When sampling stopped, in microseconds
    pub end_time_micros: u64,
    /// One Sample host object per collected sample
    pub samples: Vec<ObjectRef>,
}

#[derive(Debug, PartialEq)]
enum State {
    Idle,
    Profiling,
}

/// Time profiler binding
pub struct TimeProfiler {
    options: TimeProfilerOptions,
    state: State,
}

impl TimeProfiler {
    /// Create an idle profiler with the given options
    pub fn new(options: TimeProfilerOptions) -> Self {
        Self {
            options,
            state: State::Idle,
        }
    }

    /// Check if the profiler is currently running
    pub fn is_profiling(&self) -> bool {
        self.state == State::Profiling
    }

    /// Start profiling
    ///
    /// Registers the profiler classes (populating the isolate's constructor
    /// cache if this is the first profiler in the isolate) and starts the
    /// host's sampling engine.
    pub fn start(&mut self, host: &dyn HostContext) -> Result<(), ProfilerError> {
        if self.is_profiling() {
            return Err(ProfilerError::AlreadyProfiling);
        }
        classes::ensure_profiler_classes(host)?;
        host.start_sampling(self.options.interval_micros)?;
        self.state = State::Profiling;
        Ok(())
    }

    /// Stop profiling and assemble the collected profile
    ///
    /// With `restart` the host's sampling engine is started again
    /// immediately, so profiling continues without a separate `start` call
    /// and without tearing the profiler down in between.
    pub fn stop(
        &mut self,
        host: &dyn HostContext,
        restart: bool,
    ) -> Result<TimeProfile, ProfilerError> {
        if !self.is_profiling() {
            return Err(ProfilerError::NotProfiling);
        }
        let raw = host.stop_sampling()?;
        if restart {
            host.start_sampling(self.options.interval_micros)?;
        } else {
            self.state = State::Idle;
        }
        build_profile(host, raw)
    }
}

/// Turn a raw profile into host objects through the cached constructors
fn build_profile(
    host: &dyn HostContext,
    raw: RawTimeProfile,
) -> Result<TimeProfile, ProfilerError> {
    let mut samples = Vec::with_capacity(raw.samples.len());
    for raw_sample in &raw.samples {
        let mut locations = Vec::with_capacity(raw_sample.stack.len());
        for frame in &raw_sample.stack {
            locations.push(classes::new_location(host, frame)?);
        }
        samples.push(classes::new_sample(
            host,
            locations,
            raw_sample.hit_count,
            raw_sample.timestamp_micros,
        )?);
    }
    Ok(TimeProfile {
        start_time_micros: raw.start_time_micros,
        end_time_micros: raw.end_time_micros,
        samples,
    })
}

//! Raw time-profile data returned by the host sampling engine
//!
//! The host runtime owns the sampling machinery; when an extension stops
//! sampling it receives the collected data in this form and turns it into
//! host objects through its cached constructors.

/// A single stack frame in a raw sample
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    /// Function name, empty for anonymous frames
    pub function_name: String,
    /// Script the frame comes from
    pub script_name: String,
    /// 1-based line number
    pub line: u32,
    /// 1-based column number
    pub column: u32,
}

/// One sample: a call stack plus its weight
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Stack frames, innermost first
    pub stack: Vec<RawFrame>,
    /// Number of ticks attributed to this stack
    pub hit_count: u64,
    /// Time of the sample, in microseconds since the profile epoch
    pub timestamp_micros: u64,
}

/// A complete raw profile taken between start and stop
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTimeProfile {
    /// When sampling started, in microseconds
    pub start_time_micros: u64,
    /// When sampling stopped, in microseconds
    pub end_time_micros: u64,
    /// Collected samples
    pub samples: Vec<RawSample>,
}

impl RawTimeProfile {
    /// Total ticks across all samples
    pub fn total_hit_count(&self) -> u64 {
        self.samples.iter().map(|s| s.hit_count).sum()
    }

    /// Check if the profile holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

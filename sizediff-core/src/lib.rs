#![forbid(unsafe_code)]

pub mod error;
pub mod item;
pub mod report;
pub mod stage;
pub mod stats;

pub mod util {
    pub mod human;
}

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports: stable API surface
pub use item::{SizedItem, resolve_size};
pub use report::{ConsoleSink, ReportSink, SinkResult};
pub use stage::aggregator::{Aggregator, StopOptions};
pub use stage::tagger::Tagger;
pub use stage::{Stage, run};
pub use stats::{DiffStats, ReportRecord, RunningTotals, calculate_stats};

/// Entry stage: records each item's size before downstream transforms run.
pub fn start() -> Tagger {
    Tagger
}

/// Exit stage: observes post-transform sizes and reports the difference.
pub fn stop(options: StopOptions) -> Aggregator {
    Aggregator::new(options)
}

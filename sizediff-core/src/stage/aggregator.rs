use super::Stage;
use crate::error::{Result, SizeDiffError};
use crate::item::{SizedItem, resolve_size};
use crate::report::{ConsoleSink, ReportSink};
use crate::stats::{DiffStats, ReportRecord, RunningTotals, calculate_stats};

/// Configuration for the exit stage.
#[derive(Default)]
pub struct StopOptions {
    /// Emit one report per item instead of a single aggregate report.
    pub single_files: bool,
    /// Label forwarded to every report.
    pub title: String,
    /// Replaces the default console sink.
    pub custom_output: Option<Box<dyn ReportSink>>,
}

// Forward-only; a flushed or closed stage rejects further input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StageState {
    Idle,
    Accumulating,
    Flushed,
    Closed,
}

/// Exit stage: observes each item's post-transform size, accumulates running
/// totals, and reports per item or once at end of stream.
pub struct Aggregator {
    single_files: bool,
    title: String,
    sink: Box<dyn ReportSink>,
    totals: RunningTotals,
    state: StageState,
}

impl Aggregator {
    pub fn new(options: StopOptions) -> Self {
        let single_files = options.single_files;
        let sink = options.custom_output.unwrap_or_else(|| {
            if single_files {
                Box::new(ConsoleSink::per_file())
            } else {
                Box::new(ConsoleSink::summary())
            }
        });
        Self {
            single_files,
            title: options.title,
            sink,
            totals: RunningTotals::default(),
            state: StageState::Idle,
        }
    }

    fn guard_open(&mut self) -> Result<()> {
        if matches!(self.state, StageState::Flushed | StageState::Closed) {
            self.state = StageState::Closed;
            return Err(SizeDiffError::Closed);
        }
        Ok(())
    }

    fn emit(&mut self, label: &str, record: &ReportRecord) -> Result<()> {
        self.sink
            .report(&self.title, label, record)
            .map_err(SizeDiffError::Callback)
    }
}

impl<T: SizedItem> Stage<T> for Aggregator {
    fn process(&mut self, mut item: T) -> Result<T> {
        self.guard_open()?;
        if item.is_null() {
            return Ok(item);
        }
        let final_size = resolve_size(&item)?;
        self.state = StageState::Accumulating;

        // An untagged item (entry stage never ran) is counted as a zero
        // delta rather than failing the pipeline.
        let initial_size = match item.diff_stats() {
            Some(stats) => stats.initial_size,
            None => {
                *item.diff_stats_mut() = Some(DiffStats::tagged(final_size));
                final_size
            }
        };

        self.totals.add(initial_size, final_size);

        if self.single_files {
            if let Some(stats) = item.diff_stats_mut().as_mut() {
                stats.complete(final_size);
            }
            let record = calculate_stats(initial_size, final_size);
            let label = item.label().to_string();
            self.emit(&label, &record)?;
        } else if let Some(stats) = item.diff_stats_mut().as_mut() {
            stats.final_size = Some(final_size);
        }

        Ok(item)
    }

    fn finish(&mut self) -> Result<()> {
        self.guard_open()?;
        if !self.single_files && self.totals.files_count > 0 {
            let record = self.totals.to_record();
            self.emit("all files", &record)?;
        }
        self.state = StageState::Flushed;
        Ok(())
    }
}

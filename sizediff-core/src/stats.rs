use serde::{Deserialize, Serialize};

use crate::util::human::pretty_bytes;

/// Per-item size bookkeeping. Attached by the entry stage, completed by the
/// exit stage. `final_size` stays `None` until the exit stage observes it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub initial_size: u64,
    pub final_size: Option<u64>,
    pub diff_bytes: i64,
    pub diff_percent: String,
    pub compression_ratio: f64,
}

impl DiffStats {
    pub fn tagged(initial_size: u64) -> Self {
        Self {
            initial_size,
            final_size: None,
            diff_bytes: 0,
            diff_percent: "0%".into(),
            compression_ratio: 0.0,
        }
    }

    /// Records the post-transform size and fills in the derived figures.
    pub fn complete(&mut self, final_size: u64) {
        let rec = calculate_stats(self.initial_size, final_size);
        self.final_size = Some(final_size);
        self.diff_bytes = rec.diff_bytes;
        self.diff_percent = rec.diff_percent;
        self.compression_ratio = rec.compression_ratio;
    }
}

/// Stream-wide accumulator, owned by exactly one exit stage instance.
/// All three fields only ever grow.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunningTotals {
    pub files_count: u64,
    pub initial_size: u64,
    pub final_size: u64,
}

impl RunningTotals {
    pub fn add(&mut self, initial_size: u64, final_size: u64) {
        self.files_count += 1;
        self.initial_size += initial_size;
        self.final_size += final_size;
    }

    pub fn to_record(&self) -> ReportRecord {
        let mut rec = calculate_stats(self.initial_size, self.final_size);
        rec.files_count = self.files_count;
        rec
    }
}

/// What a reporting sink receives: the raw sizes, the display-rounded
/// figures, and pretty-printed size strings. `files_count` is 1 for a
/// per-item report and the stream length for an aggregate one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportRecord {
    pub files_count: u64,
    pub initial_size: u64,
    pub final_size: u64,
    pub diff_bytes: i64,
    pub diff_percent: String,
    pub compression_ratio: f64,
    pub pretty_initial_size: String,
    pub pretty_final_size: String,
    pub pretty_diff_bytes: String,
}

/// Derived figures for one item or a whole stream.
///
/// Percent and ratio are rounded for display only; callers needing exact
/// values use the raw sizes. Both are 0 when `initial_size` is 0, so a
/// zero-byte input never divides by zero.
pub fn calculate_stats(initial_size: u64, final_size: u64) -> ReportRecord {
    let diff_bytes = initial_size as i64 - final_size as i64;
    let (diff_percent, compression_ratio) = if initial_size > 0 {
        (
            format!(
                "{}%",
                round1(final_size as f64 / initial_size as f64 * 100.0)
            ),
            round2(diff_bytes as f64 / initial_size as f64),
        )
    } else {
        ("0%".to_string(), 0.0)
    };
    ReportRecord {
        files_count: 1,
        initial_size,
        final_size,
        diff_bytes,
        diff_percent,
        compression_ratio,
        pretty_initial_size: pretty_bytes(initial_size as i64),
        pretty_final_size: pretty_bytes(final_size as i64),
        pretty_diff_bytes: pretty_bytes(diff_bytes),
    }
}

// Half-away-from-zero, one and two decimals.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

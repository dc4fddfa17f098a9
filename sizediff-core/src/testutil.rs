use crate::item::SizedItem;
use crate::stats::DiffStats;

/// Minimal in-memory item for stage tests.
#[derive(Debug)]
pub struct MemFile {
    label: String,
    contents: Option<Vec<u8>>,
    reported: Option<u64>,
    null: bool,
    streamed: bool,
    pub stats: Option<DiffStats>,
}

impl MemFile {
    fn bare(label: &str) -> Self {
        Self {
            label: label.to_string(),
            contents: None,
            reported: None,
            null: false,
            streamed: false,
            stats: None,
        }
    }

    pub fn with_contents(label: &str, len: usize) -> Self {
        Self {
            contents: Some(vec![b'x'; len]),
            ..Self::bare(label)
        }
    }

    pub fn empty(label: &str) -> Self {
        Self::bare(label)
    }

    pub fn null(label: &str) -> Self {
        Self {
            null: true,
            ..Self::bare(label)
        }
    }

    pub fn streamed(label: &str) -> Self {
        Self {
            streamed: true,
            ..Self::bare(label)
        }
    }

    pub fn reported(mut self, size: u64) -> Self {
        self.reported = Some(size);
        self
    }

    /// Pre-tagged item: what the entry stage would have produced for
    /// `initial`, now claiming `final_size` bytes.
    pub fn tagged(label: &str, initial: u64, final_size: u64) -> Self {
        Self {
            stats: Some(DiffStats::tagged(initial)),
            reported: Some(final_size),
            ..Self::bare(label)
        }
    }
}

impl SizedItem for MemFile {
    fn label(&self) -> &str {
        &self.label
    }

    fn is_null(&self) -> bool {
        self.null
    }

    fn is_stream(&self) -> bool {
        self.streamed
    }

    fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    fn reported_size(&self) -> Option<u64> {
        self.reported
    }

    fn diff_stats(&self) -> Option<&DiffStats> {
        self.stats.as_ref()
    }

    fn diff_stats_mut(&mut self) -> &mut Option<DiffStats> {
        &mut self.stats
    }
}

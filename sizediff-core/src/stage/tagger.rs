use super::Stage;
use crate::error::Result;
use crate::item::{SizedItem, resolve_size};
use crate::stats::DiffStats;

/// Entry stage: stamps each item with its observed size.
///
/// Stateless; contents pass through untouched. Null items are skipped,
/// streamed items fail the pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tagger;

impl<T: SizedItem> Stage<T> for Tagger {
    fn process(&mut self, mut item: T) -> Result<T> {
        if item.is_null() {
            return Ok(item);
        }
        let size = resolve_size(&item)?;
        *item.diff_stats_mut() = Some(DiffStats::tagged(size));
        Ok(item)
    }
}

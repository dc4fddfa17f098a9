use crate::error::{Result, SizeDiffError};
use crate::stats::DiffStats;

/// A unit of content flowing through the pipeline, e.g. a file-like object.
///
/// The stages never touch content; they only read sizes and write into the
/// item's owned `DiffStats` slot.
pub trait SizedItem {
    /// Label used in reports, typically a relative path.
    fn label(&self) -> &str;

    /// Placeholder with no content. Passes through both stages untouched.
    fn is_null(&self) -> bool;

    /// Unbounded/streamed content. Cannot be measured and fails the pipeline.
    fn is_stream(&self) -> bool;

    fn contents(&self) -> Option<&[u8]>;

    /// Separately reported size, consulted when content is not available.
    fn reported_size(&self) -> Option<u64>;

    fn diff_stats(&self) -> Option<&DiffStats>;

    fn diff_stats_mut(&mut self) -> &mut Option<DiffStats>;
}

/// Resolve an item's measurable byte size.
///
/// Precedence: content byte length, then the reported size field, then 0.
pub fn resolve_size<T: SizedItem + ?Sized>(item: &T) -> Result<u64> {
    if item.is_stream() {
        return Err(SizeDiffError::Unsupported(
            "size cannot be determined without full buffering".into(),
        ));
    }
    Ok(item
        .contents()
        .map(|c| c.len() as u64)
        .or_else(|| item.reported_size())
        .unwrap_or(0))
}

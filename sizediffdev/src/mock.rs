use sizediff_core::{DiffStats, SizedItem};

/// In-memory stand-in for a file object flowing through the pipeline.
pub struct MockFile {
    pub relative: String,
    pub contents: Option<Vec<u8>>,
    pub stats: Option<DiffStats>,
}

impl MockFile {
    pub fn new(relative: &str, size: usize) -> Self {
        Self {
            relative: relative.to_string(),
            contents: Some(fill(size)),
            stats: None,
        }
    }
}

// Compressible filler, like machine-generated CSS.
fn fill(size: usize) -> Vec<u8> {
    const PATTERN: &[u8] = b".selector { margin: 0; padding: 0; }\n";
    PATTERN.iter().copied().cycle().take(size).collect()
}

impl SizedItem for MockFile {
    fn label(&self) -> &str {
        &self.relative
    }

    fn is_null(&self) -> bool {
        self.contents.is_none()
    }

    fn is_stream(&self) -> bool {
        false
    }

    fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    fn reported_size(&self) -> Option<u64> {
        None
    }

    fn diff_stats(&self) -> Option<&DiffStats> {
        self.stats.as_ref()
    }

    fn diff_stats_mut(&mut self) -> &mut Option<DiffStats> {
        &mut self.stats
    }
}

pub fn test_files() -> Vec<MockFile> {
    vec![
        MockFile::new("style.css", 80000),
        MockFile::new("header.css", 5000),
        MockFile::new("landing.css", 9000),
        MockFile::new("footer.js", 10000),
    ]
}

#[cfg(test)]
mod tests {
    use super::test_files;
    use sizediff_core::SizedItem;

    #[test]
    fn demo_set_has_the_expected_sizes() {
        let files = test_files();
        let sizes: Vec<_> = files.iter().map(|f| f.contents().unwrap().len()).collect();
        assert_eq!(sizes, [80000, 5000, 9000, 10000]);
        assert!(files.iter().all(|f| !f.is_null() && !f.is_stream()));
    }
}

use sizediff_core::Stage;
use sizediff_core::error::Result;

use crate::mock::MockFile;

/// Demo transform stage: replaces item contents with their zstd-compressed
/// form, in place.
pub struct ZstdOptimizer {
    level: i32,
}

impl ZstdOptimizer {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

impl Stage<MockFile> for ZstdOptimizer {
    fn process(&mut self, mut item: MockFile) -> Result<MockFile> {
        if let Some(buf) = item.contents.take() {
            item.contents = Some(zstd::bulk::compress(&buf, self.level)?);
        }
        Ok(item)
    }
}

use crate::error::Result;
use crate::item::SizedItem;

pub mod aggregator;
pub mod tagger;

/// One pipeline stage. Items pass through `process` one at a time, in
/// arrival order; `finish` runs once after the last item.
pub trait Stage<T: SizedItem> {
    fn process(&mut self, item: T) -> Result<T>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Drive `items` through `stages`, one item fully through every stage before
/// the next is accepted. Any error aborts the run before any stage is
/// flushed, so partial totals are discarded rather than reported.
pub fn run<T, I>(items: I, stages: &mut [&mut dyn Stage<T>]) -> Result<Vec<T>>
where
    T: SizedItem,
    I: IntoIterator<Item = T>,
{
    let mut out = Vec::new();
    for mut item in items {
        for stage in stages.iter_mut() {
            item = stage.process(item)?;
        }
        out.push(item);
    }
    for stage in stages.iter_mut() {
        stage.finish()?;
    }
    Ok(out)
}

use sizediff_core::error::Result;
use sizediff_core::{ReportRecord, SinkResult, StopOptions, run, start, stop};

use crate::mock::{self, MockFile};
use crate::optimizer::ZstdOptimizer;

fn run_pipeline(options: StopOptions, level: i32) -> Result<Vec<MockFile>> {
    let mut tag = start();
    let mut optimize = ZstdOptimizer::new(level);
    let mut report = stop(options);
    run(
        mock::test_files(),
        &mut [&mut tag, &mut optimize, &mut report],
    )
}

pub fn handle_single(title: String, level: i32) -> Result<()> {
    run_pipeline(
        StopOptions {
            single_files: true,
            title,
            ..Default::default()
        },
        level,
    )?;
    Ok(())
}

pub fn handle_aggregate(title: String, level: i32) -> Result<()> {
    run_pipeline(
        StopOptions {
            title,
            ..Default::default()
        },
        level,
    )?;
    Ok(())
}

pub fn handle_custom(title: String, level: i32) -> Result<()> {
    let sink = |title: &str, label: &str, record: &ReportRecord| -> SinkResult {
        println!(
            "[custom] {title} | {label}: {} -> {} (saved {})",
            record.pretty_initial_size, record.pretty_final_size, record.pretty_diff_bytes
        );
        Ok(())
    };
    run_pipeline(
        StopOptions {
            title,
            custom_output: Some(Box::new(sink)),
            ..Default::default()
        },
        level,
    )?;
    Ok(())
}

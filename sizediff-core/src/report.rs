use crate::stats::ReportRecord;

/// Outcome of one sink invocation. Failures wrap into
/// [`SizeDiffError::Callback`](crate::error::SizeDiffError::Callback) and
/// abort the stream.
pub type SinkResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Pluggable report output, invoked synchronously from the exit stage.
pub trait ReportSink {
    fn report(&mut self, title: &str, label: &str, record: &ReportRecord) -> SinkResult;
}

impl<F> ReportSink for F
where
    F: FnMut(&str, &str, &ReportRecord) -> SinkResult,
{
    fn report(&mut self, title: &str, label: &str, record: &ReportRecord) -> SinkResult {
        self(title, label, record)
    }
}

/// Default sink: formats a report and writes it to stderr.
///
/// Per-item reports are one-liners; the aggregate report is a multi-line
/// block with the full figures.
pub struct ConsoleSink {
    summary: bool,
}

impl ConsoleSink {
    pub fn per_file() -> Self {
        Self { summary: false }
    }

    pub fn summary() -> Self {
        Self { summary: true }
    }
}

fn headline(title: &str, label: &str) -> String {
    match (title.is_empty(), label.is_empty()) {
        (true, true) => String::new(),
        (true, false) => label.to_string(),
        (false, true) => title.to_string(),
        (false, false) => format!("{title} {label}"),
    }
}

impl ReportSink for ConsoleSink {
    fn report(&mut self, title: &str, label: &str, record: &ReportRecord) -> SinkResult {
        let head = headline(title, label);
        let message = if self.summary {
            format!(
                "{head}\n\
                 Files count: {}\n\
                 Initial size: {}\n\
                 Final size: {}\n\
                 Difference bytes: {}\n\
                 Difference percent: {}\n\
                 Compression ratio: {:.2}",
                record.files_count,
                record.pretty_initial_size,
                record.pretty_final_size,
                record.pretty_diff_bytes,
                record.diff_percent,
                record.compression_ratio,
            )
        } else {
            format!(
                "{head} ~ saved {} ({})",
                record.pretty_diff_bytes, record.diff_percent
            )
        };
        eprintln!("{message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportSink, SinkResult, headline};
    use crate::stats::{ReportRecord, calculate_stats};

    #[test]
    fn headline_skips_empty_parts() {
        assert_eq!(headline("", ""), "");
        assert_eq!(headline("CSS", ""), "CSS");
        assert_eq!(headline("", "all files"), "all files");
        assert_eq!(headline("CSS", "all files"), "CSS all files");
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |title: &str, label: &str, record: &ReportRecord| -> SinkResult {
                seen.push((title.to_string(), label.to_string(), record.diff_bytes));
                Ok(())
            };
            let rec = calculate_stats(10, 4);
            sink.report("t", "l", &rec).unwrap();
        }
        assert_eq!(seen, vec![("t".to_string(), "l".to_string(), 6)]);
    }
}

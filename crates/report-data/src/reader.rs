//! Newline-delimited JSON log loading.
//!
//! Reads request records (`url`, `response_time`) from log files and
//! accumulates them into a [`StatsTable`]. Problems with a file or a line are
//! reported to a [`DiagnosticSink`] and never stop the run.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use report_core::models::{LogRecord, MissingKey, RawLogRecord, StatsTable};
use report_core::ReportError;
use serde::Deserialize;
use tracing::debug;

use crate::diagnostics::DiagnosticSink;

// ── AggregationSummary ────────────────────────────────────────────────────────

/// Counters describing one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Files that were opened and read to the end.
    pub files_read: usize,
    /// Files that could not be opened, or failed part-way through.
    pub files_skipped: usize,
    /// Lines accumulated into the table.
    pub lines_accepted: usize,
    /// Non-blank lines rejected with a diagnostic.
    pub lines_rejected: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read every file in `paths`, in order, into a single [`StatsTable`].
pub fn process_log_files<P, S>(paths: &[P], sink: &mut S) -> StatsTable
where
    P: AsRef<Path>,
    S: DiagnosticSink + ?Sized,
{
    aggregate_log_files(paths, sink).0
}

/// Like [`process_log_files`], also returning the pass counters.
pub fn aggregate_log_files<P, S>(paths: &[P], sink: &mut S) -> (StatsTable, AggregationSummary)
where
    P: AsRef<Path>,
    S: DiagnosticSink + ?Sized,
{
    let mut aggregator = LogAggregator::new();
    for path in paths {
        aggregator.process_file(path.as_ref(), sink);
    }

    let (table, summary) = aggregator.finish();
    debug!(
        "Aggregated {} requests over {} endpoints ({} files read, {} skipped, {} lines rejected)",
        table.total_requests(),
        table.len(),
        summary.files_read,
        summary.files_skipped,
        summary.lines_rejected,
    );
    (table, summary)
}

/// Decode one non-blank log line into a [`LogRecord`].
///
/// `path` only labels the returned error.
pub fn parse_record(path: &Path, line: &str) -> Result<LogRecord, ReportError> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|_| ReportError::MalformedRecord {
            path: path.to_path_buf(),
            line: line.to_string(),
        })?;

    if !value.is_object() {
        return Err(invalid_record(path, line, "expected a JSON object"));
    }

    let raw = RawLogRecord::deserialize(&value)
        .map_err(|e| invalid_record(path, line, &e.to_string()))?;

    raw.into_record()
        .map_err(|MissingKey(key)| ReportError::MissingField {
            key,
            path: path.to_path_buf(),
        })
}

// ── LogAggregator ─────────────────────────────────────────────────────────────

/// Accumulates records from any number of files into one [`StatsTable`].
#[derive(Debug, Default)]
pub struct LogAggregator {
    table: StatsTable,
    summary: AggregationSummary,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` and accumulate its lines.
    ///
    /// A file that cannot be opened contributes nothing. The handle is
    /// closed before this returns.
    pub fn process_file<S>(&mut self, path: &Path, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                self.summary.files_skipped += 1;
                let diagnostic = if e.kind() == ErrorKind::NotFound {
                    ReportError::FileNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    ReportError::FileRead {
                        path: path.to_path_buf(),
                        source: e,
                    }
                };
                emit(sink, diagnostic);
                return;
            }
        };

        self.process_reader(path, BufReader::new(file), sink);
    }

    /// Accumulate lines from an already open reader; `path` labels diagnostics.
    ///
    /// A read failure (including invalid UTF-8) abandons the rest of the
    /// input but keeps everything accumulated before it.
    pub fn process_reader<R, S>(&mut self, path: &Path, reader: R, sink: &mut S)
    where
        R: BufRead,
        S: DiagnosticSink + ?Sized,
    {
        let accepted_before = self.summary.lines_accepted;
        let rejected_before = self.summary.lines_rejected;

        for line_result in reader.lines() {
            let line = match line_result {
                Ok(l) => l,
                Err(e) => {
                    self.summary.files_skipped += 1;
                    emit(
                        sink,
                        ReportError::FileRead {
                            path: path.to_path_buf(),
                            source: e,
                        },
                    );
                    return;
                }
            };
            self.process_line(path, &line, sink);
        }

        self.summary.files_read += 1;
        debug!(
            "File {}: {} accepted, {} rejected",
            path.display(),
            self.summary.lines_accepted - accepted_before,
            self.summary.lines_rejected - rejected_before,
        );
    }

    /// Accumulate a single raw line. Blank lines are ignored.
    pub fn process_line<S>(&mut self, path: &Path, line: &str, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        match parse_record(path, trimmed) {
            Ok(record) => {
                self.table.record(&record.url, record.response_time);
                self.summary.lines_accepted += 1;
            }
            Err(diagnostic) => {
                self.summary.lines_rejected += 1;
                emit(sink, diagnostic);
            }
        }
    }

    pub fn finish(self) -> (StatsTable, AggregationSummary) {
        (self.table, self.summary)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn invalid_record(path: &Path, line: &str, reason: &str) -> ReportError {
    ReportError::InvalidRecord {
        path: PathBuf::from(path),
        line: line.to_string(),
        reason: reason.to_string(),
    }
}

fn emit<S: DiagnosticSink + ?Sized>(sink: &mut S, diagnostic: ReportError) {
    debug!("Diagnostic: {}", diagnostic);
    sink.report(diagnostic);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Destinations for recoverable problems found while reading log files.
//!
//! The reader never prints on its own. It hands each [`ReportError`] to a
//! [`DiagnosticSink`] chosen by the caller: the binary writes them to
//! stderr, tests collect them into a `Vec`.

use std::io::Write;

use report_core::ReportError;
use tracing::warn;

/// Receives every recoverable problem found during aggregation.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: ReportError);
}

impl DiagnosticSink for Vec<ReportError> {
    fn report(&mut self, diagnostic: ReportError) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: ReportError) {
        (**self).report(diagnostic);
    }
}

/// Writes one human-readable line per diagnostic to `W`.
pub struct WriterSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of diagnostics written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, diagnostic: ReportError) {
        match writeln!(self.writer, "{}", diagnostic) {
            Ok(()) => self.written += 1,
            // Nowhere left to report to; keep it in the trace log.
            Err(e) => warn!("Failed to write diagnostic '{}': {}", diagnostic, e),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn not_found(name: &str) -> ReportError {
        ReportError::FileNotFound {
            path: PathBuf::from(name),
        }
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<ReportError> = Vec::new();
        sink.report(not_found("a.log"));
        sink.report(not_found("b.log"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].to_string(), "File not found: a.log");
        assert_eq!(sink[1].to_string(), "File not found: b.log");
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        fn feed<S: DiagnosticSink>(mut sink: S) {
            sink.report(not_found("a.log"));
        }

        let mut inner: Vec<ReportError> = Vec::new();
        feed(&mut inner);
        feed(&mut inner);
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn test_writer_sink_writes_one_line_each() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report(not_found("a.log"));
        sink.report(ReportError::MissingField {
            key: "url",
            path: PathBuf::from("b.log"),
        });
        assert_eq!(sink.written(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "File not found: a.log\nMissing key 'url' in file b.log\n"
        );
    }
}

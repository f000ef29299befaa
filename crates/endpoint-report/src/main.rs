mod bootstrap;

use std::io::Write;

use report_core::settings::Settings;
#[cfg(test)]
use report_core::ReportError;
use report_data::diagnostics::{DiagnosticSink, WriterSink};
use report_data::reader::aggregate_log_files;
use report_data::report::ReportBuilder;
use report_ui::table_view::write_report_table;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Endpoint report v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut diagnostics = WriterSink::stderr();

    run(&settings, &mut out, &mut diagnostics)?;
    tracing::info!("{} diagnostics reported", diagnostics.written());
    Ok(())
}

/// Aggregate the configured files and write the report table to `out`.
///
/// Problems with individual files or lines go to `diagnostics` and never
/// fail the run; only a failure to write the table does, as
/// [`ReportError::Io`].
fn run<W, S>(settings: &Settings, out: &mut W, diagnostics: &mut S) -> report_core::Result<()>
where
    W: Write,
    S: DiagnosticSink,
{
    tracing::info!(
        "Building '{}' report from {} file(s)",
        settings.report_name,
        settings.files.len()
    );

    let (table, summary) = aggregate_log_files(&settings.files, diagnostics);
    let rows = ReportBuilder::build(&table);

    tracing::info!(
        "{} endpoints, {} requests, {} rejected lines, {} skipped files",
        rows.len(),
        table.total_requests(),
        summary.lines_rejected,
        summary.files_skipped
    );

    write_report_table(out, &rows)?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

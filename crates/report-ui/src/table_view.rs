//! Plain-text endpoint table.
//!
//! Layout: a header line, a line of dashes under every column, then one line
//! per [`ReportRow`]. Columns are separated by two spaces. Numeric columns
//! are right-aligned, the URL column is left-aligned, and widths are measured
//! in terminal columns so that non-ASCII URLs stay aligned.

use std::io::{self, Write};

use report_core::models::ReportRow;
use unicode_width::UnicodeWidthStr;

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["handler", "url", "total", "avg_response_time"];

const ALIGNMENTS: [Align; 4] = [Align::Right, Align::Left, Align::Right, Align::Right];

/// Extra width every column reserves beyond its header.
const MIN_PADDING: usize = 2;

const COLUMN_SEPARATOR: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render `rows` as a table, one `\n`-terminated line per table line.
pub fn render_report_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 4]> = rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.width() + MIN_PADDING);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    let dashes = widths.map(|w| "-".repeat(w));
    push_line(&mut out, dashes.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

/// Write the rendered table to `out`.
pub fn write_report_table<W: Write>(out: &mut W, rows: &[ReportRow]) -> io::Result<()> {
    out.write_all(render_report_table(rows).as_bytes())?;
    out.flush()
}

fn row_cells(row: &ReportRow) -> [String; 4] {
    [
        row.index.to_string(),
        row.url.clone(),
        row.count.to_string(),
        row.avg_response_time.clone(),
    ]
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) {
    let line = cells
        .zip(widths.iter().zip(ALIGNMENTS.iter()))
        .map(|(cell, (width, align))| pad(cell, *width, *align))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{}{}", cell, fill),
        Align::Right => format!("{}{}", fill, cell),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

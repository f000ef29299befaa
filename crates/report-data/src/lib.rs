//! Data layer for the endpoint report.
//!
//! Reads newline-delimited JSON log files into a [`StatsTable`], routes
//! per-file and per-line problems to a [`DiagnosticSink`], and turns the
//! table into ordered report rows.
//!
//! [`StatsTable`]: report_core::models::StatsTable
//! [`DiagnosticSink`]: diagnostics::DiagnosticSink

pub mod diagnostics;
pub mod reader;
pub mod report;

pub use report_core as core;

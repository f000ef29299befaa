//! Console presentation for the endpoint report.
//!
//! Renders report rows as a plain-text table for standard output.

pub mod table_view;

pub use report_core as core;

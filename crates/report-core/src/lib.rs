//! Shared types for the endpoint report.
//!
//! Holds the record and statistics model, the error taxonomy, the CLI
//! settings and the number formatting used by the data and UI crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{ReportError, Result};

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while building an endpoint report.
///
/// Every variant except [`ReportError::Io`] is recoverable: the aggregator
/// hands it to a diagnostic sink and carries on with the next line or file.
#[derive(Error, Debug)]
pub enum ReportError {
    /// An input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A file could not be opened or read for any reason other than absence.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid JSON.
    #[error("Failed to parse JSON in file {}: {line}", path.display())]
    MalformedRecord { path: PathBuf, line: String },

    /// A line is valid JSON but not a usable record (wrong type or not an object).
    #[error("Invalid record in file {}: {reason}: {line}", path.display())]
    InvalidRecord {
        path: PathBuf,
        line: String,
        reason: String,
    },

    /// A decoded record lacks one of the required keys.
    #[error("Missing key '{key}' in file {}", path.display())]
    MissingField { key: &'static str, path: PathBuf },

    /// Pass-through for I/O errors that do not belong to an input file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;

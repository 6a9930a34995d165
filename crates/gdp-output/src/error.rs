//! Error types for writing tidy tables.

use std::path::PathBuf;

use gdp_model::ErrorCategory;
use thiserror::Error;

/// Errors that can occur while persisting a tidy table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination directory does not exist; it is never created implicitly.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to write the CSV file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to read a cell from the DataFrame.
    #[error("failed to read column '{column}' of the tidy table: {message}")]
    DataFrame { column: String, message: String },
}

impl OutputError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryNotFound { .. } | Self::Write { .. } => ErrorCategory::Io,
            Self::DataFrame { .. } => ErrorCategory::Schema,
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

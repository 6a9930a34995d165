//! Error types for wide table ingestion.

use std::path::PathBuf;

use gdp_model::ErrorCategory;
use thiserror::Error;

/// Errors that can occur while loading a wide CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// No header row after the skipped metadata lines.
    #[error("no header row in {path} after skipping {skip_rows} metadata lines")]
    NoHeaderDetected { path: PathBuf, skip_rows: usize },

    /// File starts with a byte order mark of an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl IngestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } | Self::FileRead { .. } => ErrorCategory::Io,
            Self::CsvParse { .. }
            | Self::EmptyCsv { .. }
            | Self::NoHeaderDetected { .. }
            | Self::UnsupportedEncoding { .. } => ErrorCategory::Parse,
        }
    }

    pub(crate) fn open(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

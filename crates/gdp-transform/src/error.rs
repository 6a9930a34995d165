//! Error types for the tidy transform.

use gdp_model::ErrorCategory;
use polars::prelude::PolarsError;
use thiserror::Error;

use crate::types::TidyStep;

/// Errors raised while reshaping a wide table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column the step depends on is absent.
    #[error("column '{column}' not found (required by {step})")]
    MissingColumn { column: String, step: TidyStep },

    /// Two header labels collapse onto the same name once spaces are removed.
    #[error("columns '{first}' and '{second}' both normalize to '{column}'")]
    DuplicateColumn {
        column: String,
        first: String,
        second: String,
    },

    /// A cleaned year label is not a four-digit year.
    #[error("row {row}: year label '{value}' is not a four-digit year")]
    InvalidYear { row: usize, value: String },

    /// A value cell is neither numeric nor a missing marker.
    #[error("row {row}: {column} value '{value}' is not numeric")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TransformError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingColumn { .. } | Self::DuplicateColumn { .. } | Self::DataFrame { .. } => {
                ErrorCategory::Schema
            }
            Self::InvalidYear { .. } | Self::InvalidNumber { .. } => ErrorCategory::Cast,
        }
    }
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

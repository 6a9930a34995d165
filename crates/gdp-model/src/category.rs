//! Error taxonomy shared across ingestion, transformation, and output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse classification of a pipeline failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// File access: missing, unreadable, or unwritable paths.
    Io,
    /// Malformed CSV or missing header row.
    Parse,
    /// An expected column is absent or ambiguous.
    Schema,
    /// A value cannot be converted to its target type.
    Cast,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Schema => "schema",
            Self::Cast => "cast",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

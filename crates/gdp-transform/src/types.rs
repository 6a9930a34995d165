//! Core types for the tidy transform.

use std::fmt;

/// Stage of the wide-to-tidy pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TidyStep {
    Load,
    NormalizeHeaders,
    RenameIdentifiers,
    DropDescriptors,
    Melt,
    CleanYear,
    Cast,
    Persist,
}

impl TidyStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::NormalizeHeaders => "normalize headers",
            Self::RenameIdentifiers => "rename identifiers",
            Self::DropDescriptors => "drop descriptors",
            Self::Melt => "melt",
            Self::CleanYear => "clean year",
            Self::Cast => "cast",
            Self::Persist => "persist",
        }
    }
}

impl fmt::Display for TidyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts collected while tidying one wide table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TidyReport {
    /// Rows of the wide table (one per country).
    pub input_rows: usize,
    /// Year column labels as they appeared after header normalization.
    pub year_columns: Vec<String>,
    /// Rows of the tidy table.
    pub output_rows: usize,
    /// `gdp_cap` cells that ended up null.
    pub missing_values: usize,
    /// Year labels the suffix matcher did not touch.
    pub unmatched_year_labels: usize,
}

//! Wide-to-tidy reshape of GDP-per-capita tables.
//!
//! Takes the wide table produced by `gdp-ingest` (one row per country, one
//! text column per year) and produces the tidy table: `country`, `code`,
//! `year` (`Int64`), `gdp_cap` (`Float64`, nullable), one row per
//! country-year observation.
//!
//! # Example
//!
//! ```ignore
//! use gdp_model::SourceProfile;
//! use gdp_transform::tidy_wide_frame;
//!
//! let (tidy, report) = tidy_wide_frame(wide, &SourceProfile::wdi())?;
//! assert_eq!(report.output_rows, report.input_rows * report.year_columns.len());
//! ```
//!
//! Each step is also exported on its own; they run in this order:
//! normalize headers, rename identifiers, drop descriptors, melt, clean year
//! labels, cast types.

mod cast;
mod error;
mod headers;
mod melt;
mod pipeline;
mod types;
mod year;

pub mod normalization;

// Core types
pub use types::{TidyReport, TidyStep};

// Error type
pub use error::{Result, TransformError};

// Steps
pub use cast::{CastSummary, cast_tidy_types};
pub use headers::{
    drop_descriptor_columns, normalize_column_label, normalize_headers, rename_identifiers,
};
pub use melt::melt_year_columns;
pub use year::{clean_year_column, clean_year_label};

// Pipeline
pub use pipeline::tidy_wide_frame;

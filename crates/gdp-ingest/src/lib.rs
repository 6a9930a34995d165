//! Wide GDP table ingestion.
//!
//! Loads a source's wide CSV export into a Polars DataFrame. Every column is
//! read as text so that missing-value markers and year labels reach the
//! transform untouched.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gdp_ingest::read_wide_csv;
//!
//! // WDI DataBank exports carry four metadata lines above the header.
//! let (df, headers) = read_wide_csv(Path::new("wdi_gdp_cap_2011ppp.csv"), 4)?;
//! println!("{} countries, {} columns", df.height(), headers.len());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{CsvHeaders, read_csv_schema, read_wide_csv, validate_encoding};

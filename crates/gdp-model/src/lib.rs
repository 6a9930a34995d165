//! Data model shared by the GDP tidying crates.
//!
//! - [`columns`]: canonical column names of the tidy table
//! - [`source`]: the three GDP sources and their per-source profiles
//! - [`category`]: the error taxonomy every crate maps its errors onto

pub mod category;
pub mod columns;
pub mod source;

pub use category::ErrorCategory;
pub use columns::{CODE, COUNTRY, GDP_CAP, TIDY_COLUMNS, YEAR};
pub use source::{Source, SourceProfile, YearLabelMatch};

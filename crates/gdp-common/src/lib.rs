//! Shared utilities for the GDP tidying crates.

mod values;

pub use values::{any_to_field, column_strings, format_float, parse_i64};

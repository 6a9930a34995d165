//! CSV reading utilities.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{read_csv_schema, read_wide_csv, validate_encoding};

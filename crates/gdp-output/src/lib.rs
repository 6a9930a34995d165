//! Output generation for tidy GDP tables.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{INDEX_HEADER, write_tidy_csv};

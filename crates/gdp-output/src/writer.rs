//! Indexed CSV writer for tidy tables.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::debug;

use gdp_common::any_to_field;

use crate::error::{OutputError, Result};

/// Header of the leading row-index column (unlabeled).
pub const INDEX_HEADER: &str = "";

/// Writes `df` to `path` as comma-separated text with a leading 0-based
/// row index column.
///
/// The first header field is empty; the remaining fields are the frame's
/// column names in order. Nulls become empty fields. The parent directory
/// must already exist; an existing file is overwritten.
pub fn write_tidy_csv(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(OutputError::DirectoryNotFound {
            path: parent.to_path_buf(),
        });
    }

    let write_err = |source: csv::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut header = Vec::with_capacity(names.len() + 1);
    header.push(INDEX_HEADER.to_string());
    header.extend(names.iter().cloned());
    writer.write_record(&header).map_err(write_err)?;

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(idx.to_string());
        for (column, name) in columns.iter().zip(&names) {
            let value = column.get(idx).map_err(|e| OutputError::DataFrame {
                column: name.clone(),
                message: e.to_string(),
            })?;
            record.push(any_to_field(value));
        }
        writer.write_record(&record).map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|e| write_err(csv::Error::from(e)))?;

    debug!(path = %path.display(), rows = df.height(), "wrote tidy csv");
    Ok(path.to_path_buf())
}

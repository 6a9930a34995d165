//! Wide CSV reading with leading metadata lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_header_line};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (handled in read_first_lines)
    Ok(())
}

/// Reads the first N lines from a file.
fn read_first_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(n);

    for line_result in reader.lines().take(n) {
        let line = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line).to_string();
        lines.push(cleaned);
    }

    Ok(lines)
}

/// Reads the header row that follows `skip_rows` metadata lines.
pub fn read_csv_schema(path: &Path, skip_rows: usize) -> Result<CsvHeaders> {
    let mut lines = read_first_lines(path, skip_rows + 1)?;

    if lines.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let no_header = || IngestError::NoHeaderDetected {
        path: path.to_path_buf(),
        skip_rows,
    };
    if lines.len() <= skip_rows {
        return Err(no_header());
    }

    let header_line = lines.pop().ok_or_else(no_header)?;
    let columns = parse_header_line(&header_line).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let headers = CsvHeaders::new(columns, lines);
    if headers.is_blank() {
        return Err(no_header());
    }

    Ok(headers)
}

/// Reads a wide CSV into a Polars DataFrame with every column typed as text.
///
/// The first `skip_rows` lines are kept as metadata on the returned headers
/// and are not parsed as data. They are skipped as raw lines, ignoring CSV
/// quoting, exactly as [`read_csv_schema`] counts them.
pub fn read_wide_csv(path: &Path, skip_rows: usize) -> Result<(DataFrame, CsvHeaders)> {
    validate_encoding(path)?;
    let headers = read_csv_schema(path, skip_rows)?;

    let parse_error = |e: PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_lines(skip_rows)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        metadata_lines = headers.metadata.len(),
        "loaded wide table"
    );

    Ok((df, headers))
}

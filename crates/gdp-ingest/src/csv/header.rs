//! Header row of a wide export.

/// Header row of a wide CSV plus the metadata lines skipped above it.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Column names as written in the file (trimmed).
    pub columns: Vec<String>,
    /// Raw lines preceding the header (download date, source notes).
    pub metadata: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>, metadata: Vec<String>) -> Self {
        Self { columns, metadata }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when every header cell is blank, e.g. a `,,,` separator line.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }
}

/// Splits one header line into trimmed column names.
///
/// Quoting follows RFC 4180 (`"Korea, Rep."` stays one field). An empty line
/// yields no columns.
pub fn parse_header_line(line: &str) -> ::csv::Result<Vec<String>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(line.as_bytes());
    let mut record = ::csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }
    Ok(record.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wdi_header() {
        let columns = parse_header_line(
            "\"Country Name\",\"Country Code\",\"Series Name\",\"Series Code\",\"2010 [YR2010]\"",
        )
        .unwrap();
        assert_eq!(
            columns,
            vec![
                "Country Name",
                "Country Code",
                "Series Name",
                "Series Code",
                "2010 [YR2010]"
            ]
        );
    }

    #[test]
    fn test_quoted_comma_and_escaped_quote() {
        let columns = parse_header_line("\"Korea, Rep.\",\"say \"\"hi\"\"\"").unwrap();
        assert_eq!(columns, vec!["Korea, Rep.", "say \"hi\""]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(parse_header_line("  a  ,  b  ").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_headers() {
        let blank = CsvHeaders::new(parse_header_line(",,").unwrap(), Vec::new());
        assert_eq!(blank.len(), 3);
        assert!(blank.is_blank());

        let empty = CsvHeaders::new(parse_header_line("").unwrap(), Vec::new());
        assert!(empty.is_empty());
        assert!(empty.is_blank());
    }
}

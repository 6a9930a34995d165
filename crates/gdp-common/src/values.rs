//! Polars value helpers.
//!
//! Conversions between Polars values and the plain text used in CSV cells.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to the text written into a CSV field.
///
/// `Null` becomes an empty field and floats always keep a decimal point, so a
/// float column stays recognizable as one after a round trip through CSV.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use gdp_common::any_to_field;
///
/// assert_eq!(any_to_field(AnyValue::Null), "");
/// assert_eq!(any_to_field(AnyValue::Int64(2010)), "2010");
/// assert_eq!(any_to_field(AnyValue::Float64(4000.0)), "4000.0");
/// assert_eq!(any_to_field(AnyValue::String("Algeria")), "Algeria");
/// ```
pub fn any_to_field(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(v)),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        // For any other type, use Display but strip outer quotes if present
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Formats a float with the shortest representation that round-trips,
/// keeping `.0` on integral values.
///
/// Very large and very small magnitudes switch to scientific notation at the
/// same thresholds as Python's `repr`, with a signed exponent of at least two
/// digits (`1e+20`, `1.5e-07`), so files match pandas' `to_csv` output.
///
/// # Examples
///
/// ```
/// use gdp_common::format_float;
///
/// assert_eq!(format_float(4000.0), "4000.0");
/// assert_eq!(format_float(4200.5), "4200.5");
/// assert_eq!(format_float(0.1), "0.1");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(1.5e-7), "1.5e-07");
/// ```
pub fn format_float(v: f64) -> String {
    let repr = format!("{v:?}");
    if let Some((mantissa, exponent)) = repr.split_once('e') {
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    repr
}

/// Reads a column as optional strings, casting non-text columns first.
pub fn column_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_field_null() {
        assert_eq!(any_to_field(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_field_integers() {
        assert_eq!(any_to_field(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_field(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_field(AnyValue::UInt32(0)), "0");
    }

    #[test]
    fn test_any_to_field_floats_keep_decimal_point() {
        assert_eq!(any_to_field(AnyValue::Float64(1.0)), "1.0");
        assert_eq!(any_to_field(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_field(AnyValue::Float64(-0.25)), "-0.25");
    }

    #[test]
    fn test_format_float_exponents() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.25e100), "1.25e+100");
        assert_eq!(format_float(-3e-5), "-3e-05");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(any_to_field(AnyValue::Float64(2e-10)), "2e-10");
    }

    #[test]
    fn test_column_strings_casts_numbers() {
        let df = DataFrame::new(vec![
            Series::new("v".into(), vec![Some(1i64), None, Some(3)]).into(),
        ])
        .unwrap();

        let values = column_strings(&df, "v").unwrap();

        assert_eq!(
            values,
            vec![Some("1".to_string()), None, Some("3".to_string())]
        );
    }

    #[test]
    fn test_column_strings_missing_column() {
        let df = DataFrame::new(vec![Series::new("v".into(), vec!["a"]).into()]).unwrap();
        assert!(column_strings(&df, "w").is_err());
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64("2010"), Some(2010));
        assert_eq!(parse_i64("  1960  "), Some(1960));
        assert_eq!(parse_i64("2010[YR2010]"), None);
    }
}

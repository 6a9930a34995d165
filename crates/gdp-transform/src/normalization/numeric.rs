//! Numeric conversion for GDP-per-capita cells.

use std::sync::LazyLock;

use regex::Regex;

/// A figure with comma thousands grouping: `6,000.5`, `-1,234,567`.
static GROUPED_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("Invalid grouped number regex")
});

/// Parses a GDP figure into a finite `f64`.
///
/// Accepts plain and signed decimals, scientific notation and well-formed
/// comma thousands grouping. Commas anywhere else (`4,5`, `1,2,3`) make the
/// cell non-numeric rather than being dropped. `NaN` and infinity spellings
/// are rejected like any other text. Missing markers such as `..` are not
/// recognized here; the cast step filters them against the source profile
/// first.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = if GROUPED_NUMBER_REGEX.is_match(trimmed) {
        trimmed.replace(',', "").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.ok().filter(|number| number.is_finite())
}

/// Convert a string to numeric, handing back the original text on failure.
pub fn transform_to_numeric(value: &str) -> Result<f64, &str> {
    parse_numeric(value).ok_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_figures() {
        assert_eq!(parse_numeric("4000"), Some(4000.0));
        assert_eq!(parse_numeric("4200.75"), Some(4200.75));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
        assert_eq!(parse_numeric("  123  "), Some(123.0));
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(parse_numeric("1,234,567"), Some(1234567.0));
        assert_eq!(parse_numeric("6,000.5"), Some(6000.5));
        assert_eq!(parse_numeric("-12,345"), Some(-12345.0));
    }

    #[test]
    fn test_malformed_grouping_is_not_a_number() {
        for text in ["4,5", "1,2,3", "12,34.5", "1234,567", ",100", "100,", "1,000,00"] {
            assert_eq!(parse_numeric(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_inner_whitespace_is_not_a_number() {
        assert_eq!(parse_numeric("40 00"), None);
        assert_eq!(parse_numeric("6\u{a0}000"), None);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.23e5"), Some(123000.0));
        assert_eq!(parse_numeric("1.5E-3"), Some(0.0015));
    }

    #[test]
    fn test_non_numbers() {
        for text in ["", "  ", "..", ",", "n/a", "nan", "inf", "-infinity", "1e400"] {
            assert_eq!(parse_numeric(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_transform_failure_returns_input() {
        assert_eq!(transform_to_numeric("4000"), Ok(4000.0));
        assert_eq!(transform_to_numeric("n/a"), Err("n/a"));
        assert_eq!(transform_to_numeric("4,5"), Err("4,5"));
    }
}

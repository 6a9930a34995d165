//! Type casting of the tidy `year` and `gdp_cap` columns.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::debug;

use gdp_common::{column_strings, parse_i64};
use gdp_model::{GDP_CAP, SourceProfile, YEAR};

use crate::error::{Result, TransformError};
use crate::headers::require_column;
use crate::normalization::transform_to_numeric;
use crate::types::TidyStep;

/// What the cast step found in the `gdp_cap` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastSummary {
    /// Cells that are null after casting.
    pub missing_values: usize,
    /// Non-blank cells replaced because they matched a missing marker.
    pub marker_hits: usize,
}

/// A cleaned year label: exactly four ASCII digits, surrounding spaces allowed.
fn parse_calendar_year(label: &str) -> Option<i64> {
    let trimmed = label.trim();
    if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        parse_i64(trimmed)
    } else {
        None
    }
}

/// Casts `year` to `Int64` and `gdp_cap` to nullable `Float64`.
///
/// A `gdp_cap` cell is null when it is null already or equals one of the
/// profile's missing markers; anything else must parse as a number. The
/// first offending cell aborts the cast and nothing is replaced.
pub fn cast_tidy_types(df: &mut DataFrame, profile: &SourceProfile) -> Result<CastSummary> {
    require_column(df, YEAR, TidyStep::Cast)?;
    require_column(df, GDP_CAP, TidyStep::Cast)?;

    let years = column_strings(df, YEAR)?
        .into_iter()
        .enumerate()
        .map(|(row, label)| {
            let label = label.unwrap_or_default();
            parse_calendar_year(&label).ok_or(TransformError::InvalidYear { row, value: label })
        })
        .collect::<Result<Vec<i64>>>()?;

    let mut summary = CastSummary::default();
    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for (row, cell) in column_strings(df, GDP_CAP)?.into_iter().enumerate() {
        let value = match cell {
            None => None,
            Some(text) if profile.is_missing_marker(&text) => {
                if !text.trim().is_empty() {
                    summary.marker_hits += 1;
                }
                None
            }
            Some(text) => match transform_to_numeric(&text) {
                Ok(number) => Some(number),
                Err(original) => {
                    return Err(TransformError::InvalidNumber {
                        row,
                        column: GDP_CAP.to_string(),
                        value: original.to_string(),
                    });
                }
            },
        };
        if value.is_none() {
            summary.missing_values += 1;
        }
        values.push(value);
    }

    df.with_column(Series::new(YEAR.into(), years))?;
    df.with_column(Series::new(GDP_CAP.into(), values))?;
    debug!(
        rows = df.height(),
        missing = summary.missing_values,
        marker_hits = summary.marker_hits,
        "cast tidy columns"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn tidy(years: &[&str], values: &[Option<&str>]) -> DataFrame {
        DataFrame::new(vec![
            Series::new(YEAR.into(), years.to_vec()).into(),
            Series::new(GDP_CAP.into(), values.to_vec()).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_cast_types() {
        let mut df = tidy(&["2010", "2011"], &[Some("4000"), Some("4200.5")]);

        let summary = cast_tidy_types(&mut df, &SourceProfile::wdi()).unwrap();

        assert_eq!(summary, CastSummary::default());
        assert_eq!(df.column(YEAR).unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column(GDP_CAP).unwrap().dtype(), &DataType::Float64);
        let year = df.column(YEAR).unwrap().i64().unwrap();
        let value = df.column(GDP_CAP).unwrap().f64().unwrap();
        assert_eq!(year.get(1), Some(2011));
        assert_eq!(value.get(0), Some(4000.0));
        assert_eq!(value.get(1), Some(4200.5));
    }

    #[test]
    fn test_missing_markers_become_null() {
        let mut df = tidy(
            &["2010", "2011", "2012"],
            &[Some(".."), None, Some("4000")],
        );

        let summary = cast_tidy_types(&mut df, &SourceProfile::wdi()).unwrap();

        assert_eq!(summary.missing_values, 2);
        assert_eq!(summary.marker_hits, 1);
        let value = df.column(GDP_CAP).unwrap().f64().unwrap();
        assert_eq!(value.get(0), None);
        assert_eq!(value.get(1), None);
        assert_eq!(value.get(2), Some(4000.0));
    }

    #[test]
    fn test_unrecognized_marker_is_cast_error() {
        let profile = SourceProfile::wdi().with_missing_markers(Vec::new());
        let mut df = tidy(&["2010", "2011"], &[Some("4000"), Some("..")]);

        let err = cast_tidy_types(&mut df, &profile).unwrap_err();

        assert!(matches!(
            err,
            TransformError::InvalidNumber { row: 1, ref value, .. } if value == ".."
        ));
        assert_eq!(err.category(), gdp_model::ErrorCategory::Cast);
        // Columns untouched on failure
        assert_eq!(df.column(GDP_CAP).unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_uncleaned_year_is_cast_error() {
        let mut df = tidy(&["2010", "2011[YR2011]"], &[Some("1"), Some("2")]);

        let err = cast_tidy_types(&mut df, &SourceProfile::wdi()).unwrap_err();

        assert!(matches!(
            err,
            TransformError::InvalidYear { row: 1, ref value } if value == "2011[YR2011]"
        ));
        assert_eq!(df.column(YEAR).unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_year_must_have_four_digits() {
        for label in ["99", "-5", "20100", "+201", "２０１０"] {
            let mut df = tidy(&["2010", label], &[Some("1"), Some("2")]);

            let err = cast_tidy_types(&mut df, &SourceProfile::wdi()).unwrap_err();

            assert!(
                matches!(err, TransformError::InvalidYear { row: 1, ref value } if value == label),
                "{label:?}"
            );
        }
    }

    #[test]
    fn test_calendar_year_labels() {
        assert_eq!(parse_calendar_year("2010"), Some(2010));
        assert_eq!(parse_calendar_year(" 1960 "), Some(1960));
        assert_eq!(parse_calendar_year("0099"), Some(99));
        assert_eq!(parse_calendar_year(""), None);
    }
}

//! Year label cleanup.
//!
//! DataBank exports label year columns `2010 [YR2010]`; after header
//! normalization that is `2010[YR2010]`. Cleanup removes the bracketed
//! series suffix so only the calendar year remains.

use std::borrow::Cow;
use std::sync::LazyLock;

use polars::prelude::{DataFrame, NamedFrom, Series};
use regex::Regex;
use tracing::warn;

use gdp_common::column_strings;
use gdp_model::{YEAR, YearLabelMatch};

use crate::error::Result;
use crate::headers::require_column;
use crate::types::TidyStep;

/// `[YR` followed by any four characters and `]`.
static YEAR_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[YR.{4}\]").expect("Invalid year suffix regex"));

/// Removes every occurrence of the year suffix from `label`.
///
/// Matching is unanchored. A label without a match is returned unchanged,
/// which makes the cleanup idempotent.
pub fn clean_year_label<'a>(label: &'a str, matcher: &YearLabelMatch) -> Cow<'a, str> {
    match matcher {
        YearLabelMatch::Pattern => YEAR_SUFFIX_REGEX.replace_all(label, ""),
        YearLabelMatch::Literal { text } => {
            if text.is_empty() || !label.contains(text.as_str()) {
                Cow::Borrowed(label)
            } else {
                Cow::Owned(label.replace(text.as_str(), ""))
            }
        }
    }
}

/// Cleans every value of the `year` column in place.
///
/// Returns how many labels the matcher left untouched; those are logged as
/// a warning since they usually mean the profile does not fit the file.
pub fn clean_year_column(df: &mut DataFrame, matcher: &YearLabelMatch) -> Result<usize> {
    require_column(df, YEAR, TidyStep::CleanYear)?;

    let mut unmatched = 0usize;
    let cleaned: Vec<Option<String>> = column_strings(df, YEAR)?
        .into_iter()
        .map(|label| {
            label.map(|label| match clean_year_label(&label, matcher) {
                Cow::Borrowed(unchanged) => {
                    unmatched += 1;
                    unchanged.to_string()
                }
                Cow::Owned(cleaned) => cleaned,
            })
        })
        .collect();

    if unmatched > 0 {
        warn!(
            unmatched,
            matcher = ?matcher,
            "year labels without the expected bracketed suffix"
        );
    }

    df.with_column(Series::new(YEAR.into(), cleaned))?;
    Ok(unmatched)
}

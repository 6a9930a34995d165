//! Wide-to-long reshape.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use gdp_common::column_strings;
use gdp_model::{CODE, COUNTRY, GDP_CAP, YEAR};

use crate::error::Result;
use crate::headers::require_column;
use crate::types::TidyStep;

/// Pivots every non-identifier column into `year`/`gdp_cap` rows.
///
/// Output rows are identifier-major: all year columns of input row 0 in
/// column order, then input row 1, and so on. `country` and `code` are
/// repeated verbatim; cell values stay text until the cast step.
///
/// Returns the tidy frame and the year column labels in input order.
pub fn melt_year_columns(df: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
    require_column(df, COUNTRY, TidyStep::Melt)?;
    require_column(df, CODE, TidyStep::Melt)?;

    let year_columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| name != COUNTRY && name != CODE)
        .collect();

    let countries = column_strings(df, COUNTRY)?;
    let codes = column_strings(df, CODE)?;
    let values = year_columns
        .iter()
        .map(|name| column_strings(df, name))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let capacity = df.height() * year_columns.len();
    let mut country_out: Vec<Option<String>> = Vec::with_capacity(capacity);
    let mut code_out: Vec<Option<String>> = Vec::with_capacity(capacity);
    let mut year_out: Vec<String> = Vec::with_capacity(capacity);
    let mut value_out: Vec<Option<String>> = Vec::with_capacity(capacity);

    for row in 0..df.height() {
        for (label, column) in year_columns.iter().zip(&values) {
            country_out.push(countries[row].clone());
            code_out.push(codes[row].clone());
            year_out.push(label.clone());
            value_out.push(column[row].clone());
        }
    }

    let columns: Vec<Column> = vec![
        Series::new(COUNTRY.into(), country_out).into(),
        Series::new(CODE.into(), code_out).into(),
        Series::new(YEAR.into(), year_out).into(),
        Series::new(GDP_CAP.into(), value_out).into(),
    ];
    let tidy = DataFrame::new(columns)?;
    debug_assert_eq!(tidy.height(), capacity);
    Ok((tidy, year_columns))
}

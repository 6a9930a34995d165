//! Integration tests for the wide-to-tidy pipeline.

use polars::prelude::*;

use gdp_model::{CODE, COUNTRY, ErrorCategory, GDP_CAP, SourceProfile, YEAR, YearLabelMatch};
use gdp_transform::{TidyStep, TransformError, tidy_wide_frame};

fn wide_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn algeria() -> DataFrame {
    wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("Series Code", vec![Some("y")]),
        ("2010 [YR2010]", vec![Some("4000")]),
        ("2011 [YR2011]", vec![Some("4200")]),
    ])
}

#[test]
fn test_algeria_example() {
    let (tidy, report) = tidy_wide_frame(algeria(), &SourceProfile::wdi()).unwrap();

    let names: Vec<&str> = tidy
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(names, vec![COUNTRY, CODE, YEAR, GDP_CAP]);
    assert_eq!(tidy.height(), 2);

    let country = tidy.column(COUNTRY).unwrap().str().unwrap();
    let code = tidy.column(CODE).unwrap().str().unwrap();
    let year = tidy.column(YEAR).unwrap().i64().unwrap();
    let gdp = tidy.column(GDP_CAP).unwrap().f64().unwrap();
    assert_eq!(
        (country.get(0), code.get(0), year.get(0), gdp.get(0)),
        (Some("Algeria"), Some("ALG"), Some(2010), Some(4000.0))
    );
    assert_eq!(
        (country.get(1), code.get(1), year.get(1), gdp.get(1)),
        (Some("Algeria"), Some("ALG"), Some(2011), Some(4200.0))
    );

    assert_eq!(report.input_rows, 1);
    assert_eq!(report.output_rows, 2);
    assert_eq!(report.year_columns, vec!["2010[YR2010]", "2011[YR2011]"]);
    assert_eq!(report.missing_values, 0);
    assert_eq!(report.unmatched_year_labels, 0);
}

#[test]
fn test_missing_values_are_preserved() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Andorra"), Some("Angola")]),
        ("Country Code", vec![Some("AND"), Some("AGO")]),
        ("Series Name", vec![Some("x"), Some("x")]),
        ("Series Code", vec![Some("y"), Some("y")]),
        ("2010 [YR2010]", vec![Some(".."), None]),
        ("2011 [YR2011]", vec![Some("6000.5"), Some("..")]),
    ]);

    let (tidy, report) = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap();

    assert_eq!(tidy.height(), 4);
    assert_eq!(report.missing_values, 3);
    let gdp = tidy.column(GDP_CAP).unwrap().f64().unwrap();
    assert_eq!(gdp.get(0), None);
    assert_eq!(gdp.get(1), Some(6000.5));
    assert_eq!(gdp.null_count(), 3);
}

#[test]
fn test_missing_series_code_is_schema_error() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("2010 [YR2010]", vec![Some("4000")]),
    ]);

    let err = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Schema);
    assert!(matches!(
        err,
        TransformError::MissingColumn {
            ref column,
            step: TidyStep::DropDescriptors,
        } if column == "SeriesCode"
    ));
}

#[test]
fn test_missing_country_column_is_schema_error() {
    let wide = wide_df(vec![
        ("Country", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
    ]);

    let err = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Schema);
}

#[test]
fn test_literal_matcher_leaves_other_years_uncleaned() {
    let profile = SourceProfile::wdi().with_year_label(YearLabelMatch::Literal {
        text: "[YR2010]".to_string(),
    });

    let err = tidy_wide_frame(algeria(), &profile).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Cast);
    assert!(matches!(
        err,
        TransformError::InvalidYear { row: 1, ref value } if value == "2011[YR2011]"
    ));
}

#[test]
fn test_plain_year_headers_pass_through() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("Series Code", vec![Some("y")]),
        ("2010", vec![Some("4000")]),
    ]);

    let (tidy, report) = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap();

    assert_eq!(report.unmatched_year_labels, 1);
    let year = tidy.column(YEAR).unwrap().i64().unwrap();
    assert_eq!(year.get(0), Some(2010));
}

#[test]
fn test_non_numeric_value_is_cast_error() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("Series Code", vec![Some("y")]),
        ("2010 [YR2010]", vec![Some("n/a")]),
    ]);

    let err = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Cast);
}

#[test]
fn test_short_year_label_is_cast_error() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("Series Code", vec![Some("y")]),
        ("99 [YR0099]", vec![Some("4000")]),
    ]);

    let err = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Cast);
    assert!(matches!(
        err,
        TransformError::InvalidYear { row: 0, ref value } if value == "99"
    ));
}

#[test]
fn test_malformed_grouping_is_cast_error() {
    let wide = wide_df(vec![
        ("Country Name", vec![Some("Algeria")]),
        ("Country Code", vec![Some("ALG")]),
        ("Series Name", vec![Some("x")]),
        ("Series Code", vec![Some("y")]),
        ("2010 [YR2010]", vec![Some("1,2,3")]),
    ]);

    let err = tidy_wide_frame(wide, &SourceProfile::wdi()).unwrap_err();

    assert!(matches!(
        err,
        TransformError::InvalidNumber { row: 0, ref value, .. } if value == "1,2,3"
    ));
}

//! Header normalization, identifier renaming, and descriptor dropping.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;
use tracing::debug;

use gdp_model::{CODE, COUNTRY, SourceProfile};

use crate::error::{Result, TransformError};
use crate::types::TidyStep;

/// Removes every space character from a column label.
///
/// `"Country Name"` becomes `"CountryName"`, `"2010 [YR2010]"` becomes
/// `"2010[YR2010]"`. Other whitespace is left alone.
pub fn normalize_column_label(label: &str) -> String {
    label.replace(' ', "")
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names()
        .iter()
        .any(|column| column.as_str() == name)
}

pub(crate) fn require_column(df: &DataFrame, name: &str, step: TidyStep) -> Result<()> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(TransformError::MissingColumn {
            column: name.to_string(),
            step,
        })
    }
}

/// Removes spaces from every column label.
///
/// Fails without renaming anything if two labels would end up identical.
pub fn normalize_headers(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for name in &names {
        let normalized = normalize_column_label(name);
        if let Some(first) = seen.get(&normalized) {
            return Err(TransformError::DuplicateColumn {
                column: normalized,
                first: (*first).to_string(),
                second: name.clone(),
            });
        }
        seen.insert(normalized, name);
    }

    for name in &names {
        let normalized = normalize_column_label(name);
        if normalized != *name {
            df.rename(name, normalized.as_str().into())?;
        }
    }
    Ok(())
}

/// Renames the profile's country and code columns to `country` and `code`.
///
/// Expects headers to be normalized already; the profile's column names are
/// normalized the same way before lookup.
pub fn rename_identifiers(df: &mut DataFrame, profile: &SourceProfile) -> Result<()> {
    let renames = [
        (normalize_column_label(&profile.country_column), COUNTRY),
        (normalize_column_label(&profile.code_column), CODE),
    ];
    for (source, _) in &renames {
        require_column(df, source, TidyStep::RenameIdentifiers)?;
    }
    for (source, target) in &renames {
        if source != target {
            df.rename(source, (*target).into())?;
            debug!(from = %source, to = %target, "renamed identifier column");
        }
    }
    Ok(())
}

/// Drops the profile's descriptor columns.
///
/// Every descriptor must be present; nothing is dropped when one is missing.
pub fn drop_descriptor_columns(df: &mut DataFrame, profile: &SourceProfile) -> Result<()> {
    let descriptors: Vec<String> = profile
        .descriptor_columns
        .iter()
        .map(|name| normalize_column_label(name))
        .collect();
    for name in &descriptors {
        require_column(df, name, TidyStep::DropDescriptors)?;
    }
    for name in &descriptors {
        df.drop_in_place(name)?;
        debug!(column = %name, "dropped descriptor column");
    }
    Ok(())
}

//! Wide-to-tidy pipeline.

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use gdp_model::SourceProfile;

use crate::cast::cast_tidy_types;
use crate::error::Result;
use crate::headers::{drop_descriptor_columns, normalize_headers, rename_identifiers};
use crate::melt::melt_year_columns;
use crate::types::{TidyReport, TidyStep};
use crate::year::clean_year_column;

/// Runs every in-memory step on a freshly loaded wide table.
///
/// Order: normalize headers, rename identifiers, drop descriptors, melt,
/// clean year labels, cast. The first failing step aborts the run.
pub fn tidy_wide_frame(
    mut wide: DataFrame,
    profile: &SourceProfile,
) -> Result<(DataFrame, TidyReport)> {
    let span = info_span!("tidy", source = %profile.source);
    let _guard = span.enter();

    let input_rows = wide.height();

    info_span!("step", step = %TidyStep::NormalizeHeaders)
        .in_scope(|| normalize_headers(&mut wide))?;
    info_span!("step", step = %TidyStep::RenameIdentifiers)
        .in_scope(|| rename_identifiers(&mut wide, profile))?;
    info_span!("step", step = %TidyStep::DropDescriptors)
        .in_scope(|| drop_descriptor_columns(&mut wide, profile))?;

    let (mut tidy, year_columns) =
        info_span!("step", step = %TidyStep::Melt).in_scope(|| melt_year_columns(&wide))?;
    debug!(year_columns = ?year_columns, "melted year columns");

    let unmatched_year_labels = info_span!("step", step = %TidyStep::CleanYear)
        .in_scope(|| clean_year_column(&mut tidy, &profile.year_label))?;
    let cast = info_span!("step", step = %TidyStep::Cast)
        .in_scope(|| cast_tidy_types(&mut tidy, profile))?;

    let report = TidyReport {
        input_rows,
        output_rows: tidy.height(),
        year_columns,
        missing_values: cast.missing_values,
        unmatched_year_labels,
    };
    info!(
        input_rows = report.input_rows,
        year_columns = report.year_columns.len(),
        output_rows = report.output_rows,
        missing_values = report.missing_values,
        "tidied wide table"
    );
    Ok((tidy, report))
}

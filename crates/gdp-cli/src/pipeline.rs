//! Tidy pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: read the wide CSV, skipping the source's metadata lines
//! 2. **Tidy**: normalize headers, rename identifiers, drop descriptors,
//!    melt, clean year labels, cast (see [`gdp_transform::tidy_wide_frame`])
//! 3. **Persist**: write the indexed tidy CSV (skipped on dry runs)
//!
//! The first failing stage aborts the run; nothing is written on failure.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{info, info_span};

use gdp_ingest::{IngestError, read_wide_csv};
use gdp_model::{ErrorCategory, Source, SourceProfile};
use gdp_output::{OutputError, write_tidy_csv};
use gdp_transform::{TidyReport, TidyStep, TransformError, tidy_wide_frame};

/// Any failure of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// The source is declared but its input schema is unknown.
    #[error("no loader for source '{0}'; supply a JSON profile describing its layout")]
    NoLoader(Source),
}

impl PipelineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Ingest(error) => error.category(),
            Self::Transform(error) => error.category(),
            Self::Output(error) => error.category(),
            Self::NoLoader(_) => ErrorCategory::Schema,
        }
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The tidy table (`country`, `code`, `year`, `gdp_cap`).
    pub tidy: DataFrame,
    pub report: TidyReport,
    /// Metadata lines skipped above the header row.
    pub metadata: Vec<String>,
    /// Written file, `None` on dry runs.
    pub output: Option<PathBuf>,
}

/// Returns the builtin profile of `source`, or `NoLoader` when it has none.
pub fn builtin_profile(source: Source) -> Result<SourceProfile, PipelineError> {
    source.profile().ok_or(PipelineError::NoLoader(source))
}

/// Default output location: the source's file name next to the input.
pub fn default_output_path(input: &Path, source: Source) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(source.default_output_name())
}

/// Runs Load, Tidy and (when `output` is set) Persist for one input file.
pub fn run_pipeline(
    input: &Path,
    output: Option<&Path>,
    profile: &SourceProfile,
) -> Result<PipelineOutcome, PipelineError> {
    let span = info_span!("pipeline", input = %input.display(), source = %profile.source);
    let _guard = span.enter();
    let start = Instant::now();

    let (wide, headers) = info_span!("step", step = %TidyStep::Load)
        .in_scope(|| read_wide_csv(input, profile.skip_rows))?;
    info!(
        rows = wide.height(),
        columns = headers.len(),
        metadata_lines = headers.metadata.len(),
        "loaded wide table"
    );

    let (tidy, report) = tidy_wide_frame(wide, profile)?;

    let written = match output {
        Some(path) => {
            let written = info_span!("step", step = %TidyStep::Persist)
                .in_scope(|| write_tidy_csv(&tidy, path))?;
            info!(path = %written.display(), rows = tidy.height(), "wrote tidy table");
            Some(written)
        }
        None => {
            info!("dry run; output not written");
            None
        }
    };

    info!(
        duration_ms = start.elapsed().as_millis(),
        output_rows = report.output_rows,
        "pipeline complete"
    );
    Ok(PipelineOutcome {
        tidy,
        report,
        metadata: headers.metadata,
        output: written,
    })
}

use std::fs;
use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use gdp_cli::pipeline::{PipelineError, builtin_profile, default_output_path, run_pipeline};
use gdp_model::{ErrorCategory, Source, SourceProfile, YearLabelMatch};

use crate::cli::TidyArgs;
use crate::summary::{apply_table_style, loader_cell};
use crate::types::TidyResult;

pub fn run_sources() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Name", "Loader", "Homepage"]);
    apply_table_style(&mut table);
    for source in Source::ALL {
        table.add_row(vec![
            source.code().into(),
            source.name().into(),
            loader_cell(source.has_loader()),
            source.homepage().into(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_tidy(args: &TidyArgs) -> Result<TidyResult> {
    let profile = resolve_profile(args)?;
    let span = info_span!("tidy", input = %args.input.display(), source = %profile.source);
    let _guard = span.enter();

    let output = if args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(&args.input, profile.source)),
        )
    };

    let outcome = run_pipeline(&args.input, output.as_deref(), &profile)?;
    Ok(TidyResult {
        input: args.input.clone(),
        source: profile.source,
        output: outcome.output,
        metadata_lines: outcome.metadata.len(),
        report: outcome.report,
    })
}

/// Builtin or JSON profile with the command-line overrides applied.
fn resolve_profile(args: &TidyArgs) -> Result<SourceProfile> {
    let mut profile = match &args.profile {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read profile {}", path.display()))?;
            serde_json::from_str::<SourceProfile>(&text)
                .with_context(|| format!("parse profile {}", path.display()))?
        }
        None => builtin_profile(args.source.into())?,
    };
    if let Some(skip_rows) = args.skip_rows {
        profile = profile.with_skip_rows(skip_rows);
    }
    if !args.missing.is_empty() {
        profile = profile.with_missing_markers(args.missing.clone());
    }
    if let Some(text) = &args.year_literal {
        profile = profile.with_year_label(YearLabelMatch::Literal { text: text.clone() });
    }
    debug!(?profile, "resolved source profile");
    Ok(profile)
}

/// Maps a command failure onto the error taxonomy.
pub fn error_category(error: &anyhow::Error) -> ErrorCategory {
    for cause in error.chain() {
        if let Some(error) = cause.downcast_ref::<PipelineError>() {
            return error.category();
        }
        if cause.is::<serde_json::Error>() {
            return ErrorCategory::Parse;
        }
        if cause.is::<io::Error>() {
            return ErrorCategory::Io;
        }
    }
    ErrorCategory::Io
}

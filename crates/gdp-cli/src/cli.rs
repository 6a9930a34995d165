//! CLI argument definitions for the GDP tidy tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use gdp_cli::logging::{LogConfig, LogFormat};
use gdp_model::Source;

#[derive(Parser)]
#[command(
    name = "gdp-tidy",
    version,
    about = "Reshape wide GDP-per-capita exports into tidy CSV",
    long_about = "Reshape wide GDP-per-capita tables into one row per country and year.\n\n\
                  Supports World Development Indicators DataBank exports; Maddison and\n\
                  Penn World Table files can be processed with a JSON source profile."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration; `--log-level` beats `-v/-q`, which beat `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Reshape one wide CSV export into a tidy CSV.
    Tidy(TidyArgs),

    /// List the known GDP sources and whether they have a loader.
    Sources,
}

#[derive(Parser)]
pub struct TidyArgs {
    /// Path to the wide CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Source the export comes from.
    #[arg(long = "source", value_enum, default_value = "wdi")]
    pub source: SourceArg,

    /// Load the source profile from a JSON file instead of the builtin one.
    ///
    /// A profile makes any source usable, including those without a
    /// builtin loader.
    #[arg(long = "profile", value_name = "JSON")]
    pub profile: Option<PathBuf>,

    /// Output CSV path (default: <INPUT dir>/<source default file name>).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of metadata lines before the header row.
    #[arg(long = "skip-rows", value_name = "N")]
    pub skip_rows: Option<usize>,

    /// Cell text treated as a missing value (repeatable; replaces the
    /// profile's list).
    #[arg(long = "missing", value_name = "TOKEN")]
    pub missing: Vec<String>,

    /// Strip this exact text from year labels instead of the `[YR....]`
    /// pattern.
    #[arg(long = "year-literal", value_name = "TEXT")]
    pub year_literal: Option<String>,

    /// Run every step but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Wdi,
    Maddison,
    Pwt,
}

impl From<SourceArg> for Source {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Wdi => Source::Wdi,
            SourceArg::Maddison => Source::Maddison,
            SourceArg::Pwt => Source::Pwt,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

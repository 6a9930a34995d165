use std::path::PathBuf;

use gdp_model::Source;
use gdp_transform::TidyReport;

#[derive(Debug)]
pub struct TidyResult {
    pub input: PathBuf,
    pub source: Source,
    pub output: Option<PathBuf>,
    pub metadata_lines: usize,
    pub report: TidyReport,
}

use std::path::PathBuf;

use atlas_cli::pipeline::SourceSummary;
use atlas_validate::ValidationReport;

/// Everything a completed `run` produced, for the summary printer.
#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub clean_csv: PathBuf,
    pub profile: PathBuf,
    pub report: Option<PathBuf>,
    pub sources: Vec<SourceSummary>,
    pub merged_rows: usize,
    pub validation: Option<ValidationReport>,
}

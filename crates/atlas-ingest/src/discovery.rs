//! Source file discovery and per-metric selection.

use std::path::{Path, PathBuf};

use tracing::debug;

use atlas_model::Metric;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Picks the source file for a metric from a sorted file list.
///
/// Candidates are files whose stem starts with the metric's prefix
/// (`population_`, `gdp_`, `co2_emissions_`). The lexicographically
/// last filename wins: date-stamped names sort naturally by recency.
pub fn select_source_file(files: &[PathBuf], metric: Metric) -> Option<PathBuf> {
    files
        .iter()
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(|stem| {
                    stem.to_lowercase()
                        .starts_with(metric.file_prefix())
                })
                .unwrap_or(false)
        })
        .max_by(|a, b| a.file_name().cmp(&b.file_name()))
        .cloned()
}

/// Finds the most recent source file for a metric in a directory.
pub fn latest_source_file(dir: &Path, metric: Metric) -> Result<PathBuf> {
    let files = list_csv_files(dir)?;
    let selected = select_source_file(&files, metric).ok_or_else(|| IngestError::MissingSource {
        metric,
        dir: dir.to_path_buf(),
    })?;
    debug!(metric = %metric, file = %selected.display(), "selected source file");
    Ok(selected)
}

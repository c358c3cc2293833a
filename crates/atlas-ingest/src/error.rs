//! Error types for source ingestion.

use std::path::PathBuf;

use thiserror::Error;

use atlas_model::Metric;

/// Errors that can occur while reading and normalizing source files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Raw data directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV source file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No candidate file found for a required metric.
    #[error("no source file for metric '{metric}' in {dir}")]
    MissingSource { metric: Metric, dir: PathBuf },

    /// A source file's columns match none of the recognized layouts.
    #[error("unrecognized column layout in {path}: found columns {columns:?}")]
    SchemaMismatch {
        path: PathBuf,
        columns: Vec<String>,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_names_actual_columns() {
        let err = IngestError::SchemaMismatch {
            path: PathBuf::from("raw/gdp_20240101.csv"),
            columns: vec!["region".to_string(), "amount".to_string()],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("raw/gdp_20240101.csv"));
        assert!(rendered.contains("region"));
        assert!(rendered.contains("amount"));
    }

    #[test]
    fn missing_source_names_metric_and_dir() {
        let err = IngestError::MissingSource {
            metric: Metric::Gdp,
            dir: PathBuf::from("data/raw"),
        };
        assert_eq!(
            err.to_string(),
            "no source file for metric 'gdp' in data/raw"
        );
    }
}

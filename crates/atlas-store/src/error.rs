//! Error types for the warehouse boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Queried table does not exist in the warehouse.
    #[error("table '{name}' not found in warehouse")]
    TableNotFound { name: String },

    /// Queried column does not exist in a table.
    #[error("column '{column}' not found in table '{table}'")]
    ColumnNotFound { table: String, column: String },

    /// Failed DataFrame operation.
    #[error("dataframe operation failed: {message}")]
    DataFrame { message: String },

    /// Failed to read or write a CSV artifact.
    #[error("failed to process CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Filesystem failure around an artifact path.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<polars::prelude::PolarsError> for StoreError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

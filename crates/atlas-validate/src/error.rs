//! Validation failure taxonomy.

use thiserror::Error;

use atlas_store::StoreError;

/// A hard check failure, carrying the offending measurement.
#[derive(Debug, Error)]
pub enum ValidationFailure {
    /// Existence check: the canonical table is absent.
    #[error("existence: table '{table}' not found in warehouse")]
    TableMissing { table: String },

    /// Existence check: the canonical table has no rows.
    #[error("existence: table '{table}' has no rows")]
    EmptyTable { table: String },

    /// Schema check: expected columns are absent.
    #[error("schema: missing columns {missing:?} (found {found:?})")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Missing-ratio check: too many nulls in a column.
    #[error(
        "missing_ratio: {nulls}/{total} null '{column}' values (ratio {ratio:.3}, limit {limit})"
    )]
    MissingRatio {
        column: String,
        nulls: usize,
        total: usize,
        ratio: f64,
        limit: f64,
    },

    /// Range check: a year bound falls outside the plausible window.
    #[error("year_range: {bound} year {year} outside [{min}, {max}]")]
    YearOutOfRange {
        bound: &'static str,
        year: i64,
        min: i64,
        max: i64,
    },

    /// Range check: the year column holds no values at all.
    #[error("year_range: column '{column}' has no values")]
    NoYearValues { column: String },
}

/// Errors surfaced by the validation entry point.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A hard check failed.
    #[error("validation failed: {0}")]
    Failure(#[from] ValidationFailure),

    /// The storage collaborator itself misbehaved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;

//! The storage-collaborator contract.

use polars::prelude::DataFrame;

use crate::error::Result;

/// The interface the pipeline requires from its storage collaborator.
///
/// Semantics are replace-whole-table: [`Warehouse::replace`] drops any
/// existing table of that name and recreates it from the given frame.
/// A rerun fully supersedes the prior snapshot; there is no merge-in
/// path and no concurrent-writer model.
pub trait Warehouse {
    /// Drop-if-exists, then create the named table from `frame`.
    fn replace(&mut self, name: &str, frame: DataFrame) -> Result<()>;

    /// Whether the named table exists.
    fn table_exists(&self, name: &str) -> bool;

    /// Number of rows in the named table.
    fn row_count(&self, name: &str) -> Result<usize>;

    /// Column names of the named table, in table order.
    fn columns(&self, name: &str) -> Result<Vec<String>>;

    /// Number of null cells in one column.
    fn null_count(&self, name: &str, column: &str) -> Result<usize>;

    /// Minimum and maximum of one column over non-null values.
    ///
    /// `None` when the column has no non-null values.
    fn min_max(&self, name: &str, column: &str) -> Result<Option<(f64, f64)>>;

    /// Pearson correlation of two columns over rows where both are
    /// non-null.
    ///
    /// `None` when fewer than 2 qualifying rows exist or either side
    /// has zero variance.
    fn correlation(&self, name: &str, a: &str, b: &str) -> Result<Option<f64>>;
}

//! The canonical table as a polars frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use atlas_model::{COUNTRY_NAME, MergedRow, Metric, YEAR};

/// Provenance metadata for a clean frame.
#[derive(Debug, Clone, Default)]
pub struct CleanFrameMeta {
    /// The source CSV files that contributed to this frame.
    pub source_files: Vec<PathBuf>,
}

/// The merged canonical table plus provenance.
///
/// This is the value handed to the storage collaborator; the core never
/// holds a long-lived connection to the store.
#[derive(Debug, Clone)]
pub struct CleanFrame {
    pub data: DataFrame,
    pub meta: Option<CleanFrameMeta>,
}

impl CleanFrame {
    pub fn new(data: DataFrame) -> Self {
        Self { data, meta: None }
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Get the source files that contributed to this frame.
    pub fn source_files(&self) -> &[PathBuf] {
        self.meta
            .as_ref()
            .map(|m| m.source_files.as_slice())
            .unwrap_or(&[])
    }

    /// Add a source file to the metadata.
    pub fn add_source_file(&mut self, path: PathBuf) {
        let meta = self.meta.get_or_insert_with(CleanFrameMeta::default);
        meta.source_files.push(path);
    }
}

/// Materialize merged rows into the canonical 5-column frame.
pub fn build_clean_frame(rows: &[MergedRow]) -> Result<CleanFrame> {
    let countries: Vec<String> = rows.iter().map(|row| row.country_name.clone()).collect();
    let years: Vec<i64> = rows.iter().map(|row| row.year).collect();

    let mut columns: Vec<Column> = Vec::with_capacity(2 + Metric::ALL.len());
    columns.push(Series::new(COUNTRY_NAME.into(), countries).into());
    columns.push(Series::new(YEAR.into(), years).into());
    for metric in Metric::ALL {
        let values: Vec<Option<f64>> = rows.iter().map(|row| row.value(metric)).collect();
        columns.push(Series::new(metric.column_name().into(), values).into());
    }

    let data = DataFrame::new(columns).context("build clean_data frame")?;
    Ok(CleanFrame::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_model::clean_columns;

    #[test]
    fn frame_has_canonical_columns_in_order() {
        let mut row = MergedRow::new("A", 2000);
        row.set_value(Metric::Population, Some(100.0));
        let frame = build_clean_frame(&[row]).unwrap();
        let names: Vec<String> = frame
            .data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, clean_columns().to_vec());
        assert_eq!(frame.record_count(), 1);
    }

    #[test]
    fn empty_rows_build_an_empty_frame() {
        let frame = build_clean_frame(&[]).unwrap();
        assert_eq!(frame.record_count(), 0);
        assert_eq!(frame.data.width(), 5);
    }
}

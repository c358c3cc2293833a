//! CSV import/export of canonical tables.

use std::fs::{self, File};
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};
use tracing::info;

use crate::error::{Result, StoreError};

/// Write a canonical table to CSV, creating parent directories.
pub fn write_table_csv(frame: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = frame.clone();
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut data)?;
    info!(path = %path.display(), rows = frame.height(), "wrote table CSV");
    Ok(())
}

/// Read a canonical table back from CSV.
///
/// Columns whose non-empty values all parse as numbers become nullable
/// f64 columns (empty cells = null); everything else stays text. This
/// keeps a re-loaded snapshot queryable the same way a freshly built
/// one is.
pub fn read_table_csv(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| StoreError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| StoreError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|error| StoreError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(record.get(idx).unwrap_or("").trim().to_string());
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (header, values) in headers.iter().zip(cells) {
        if is_numeric_column(&values) {
            let parsed: Vec<Option<f64>> = values
                .iter()
                .map(|value| {
                    if value.is_empty() {
                        None
                    } else {
                        value.parse::<f64>().ok()
                    }
                })
                .collect();
            columns.push(Series::new(header.as_str().into(), parsed).into());
        } else {
            columns.push(Series::new(header.as_str().into(), values).into());
        }
    }

    Ok(DataFrame::new(columns)?)
}

fn is_numeric_column(values: &[String]) -> bool {
    let mut non_empty = 0usize;
    for value in values {
        if value.is_empty() {
            continue;
        }
        if value.parse::<f64>().is_err() {
            return false;
        }
        non_empty += 1;
    }
    non_empty > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_nullable_numeric_columns() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("clean_data.csv");

        let columns: Vec<Column> = vec![
            Series::new("country_name".into(), vec!["A", "B"]).into(),
            Series::new("year".into(), vec![2000i64, 2001]).into(),
            Series::new("gdp".into(), vec![Some(1.5), None]).into(),
        ];
        let frame = DataFrame::new(columns).unwrap();
        write_table_csv(&frame, &path).unwrap();

        let loaded = read_table_csv(&path).unwrap();
        assert_eq!(loaded.height(), 2);
        let names: Vec<String> = loaded
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["country_name", "year", "gdp"]);

        let gdp = loaded.column("gdp").unwrap();
        assert_eq!(gdp.null_count(), 1);
    }
}

//! Raw CSV table reading.
//!
//! Sources arrive with inconsistent header casing, stray whitespace,
//! and the occasional UTF-8 BOM. Reading normalizes headers into the
//! `lower_snake` form the layout rules match against and keeps cell
//! values as trimmed strings; typing happens later in the cleaner.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A raw source table: normalized headers plus string rows.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Normalize a header: trim (incl. BOM), lower-case, spaces to underscores.
pub fn normalize_column(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push('_');
            normalized.push_str(part);
        }
    }
    normalized.to_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a raw CSV file into headers and rows.
///
/// The first non-blank record is the header row. Blank records are
/// skipped; short records are padded to the header width so downstream
/// indexing stays in bounds.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(cells.iter().map(|cell| normalize_column(cell)).collect()),
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for idx in 0..header_row.len() {
                    row.push(cells.get(idx).cloned().unwrap_or_default());
                }
                rows.push(row);
            }
        }
    }

    Ok(RawTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

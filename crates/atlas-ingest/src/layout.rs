//! Schema normalization: map a raw table of unknown column layout into
//! the common long format `(country_name, year, value)`.
//!
//! Dispatch is data-driven: an ordered rule table where each rule
//! declares the columns it requires, the columns that must be absent,
//! and how to produce the three output fields. Rules are tried in
//! priority order and the first match wins; a table matching no rule
//! fails closed with the actual column names.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::RawTable;

/// Where the `country_name` output field comes from.
#[derive(Debug, Clone, Copy)]
pub enum CountrySource {
    /// Taken from a named input column.
    Column(&'static str),
    /// Synthesized as a fixed literal (world-aggregate sources).
    Literal(&'static str),
}

/// One recognized source layout.
#[derive(Debug, Clone, Copy)]
pub struct LayoutRule {
    /// Short identifier for logs.
    pub name: &'static str,
    /// Columns that must all be present.
    pub requires: &'static [&'static str],
    /// Columns that must not be present.
    pub forbids: &'static [&'static str],
    pub country: CountrySource,
    pub year_column: &'static str,
    pub value_column: &'static str,
}

impl LayoutRule {
    fn matches(&self, table: &RawTable) -> bool {
        self.requires
            .iter()
            .all(|column| table.column_index(column).is_some())
            && self
                .forbids
                .iter()
                .all(|column| table.column_index(column).is_none())
    }
}

/// Recognized layouts, in priority order.
pub const LAYOUT_RULES: [LayoutRule; 3] = [
    LayoutRule {
        name: "long",
        requires: &["country_name", "year", "value"],
        forbids: &[],
        country: CountrySource::Column("country_name"),
        year_column: "year",
        value_column: "value",
    },
    LayoutRule {
        name: "country_total",
        requires: &["country", "year", "total"],
        forbids: &[],
        country: CountrySource::Column("country"),
        year_column: "year",
        value_column: "total",
    },
    LayoutRule {
        name: "world_total",
        requires: &["year", "total"],
        forbids: &["country"],
        country: CountrySource::Literal("World"),
        year_column: "year",
        value_column: "total",
    },
];

/// One row of the common long format, still untyped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    pub country_name: String,
    pub year: String,
    pub value: String,
}

/// A source table normalized to the 3-column long format.
#[derive(Debug, Clone)]
pub struct LongTable {
    /// The rule that matched, for diagnostics.
    pub layout: &'static str,
    pub rows: Vec<LongRow>,
}

/// Normalize a raw table into the long format.
///
/// Tries [`LAYOUT_RULES`] in order; fails with
/// [`IngestError::SchemaMismatch`] when none match.
pub fn normalize_layout(table: &RawTable, path: &Path) -> Result<LongTable> {
    let rule = LAYOUT_RULES
        .iter()
        .find(|rule| rule.matches(table))
        .ok_or_else(|| IngestError::SchemaMismatch {
            path: path.to_path_buf(),
            columns: table.headers.clone(),
        })?;
    debug!(layout = rule.name, path = %path.display(), "matched source layout");

    let year_idx = table
        .column_index(rule.year_column)
        .expect("required column checked by rule match");
    let value_idx = table
        .column_index(rule.value_column)
        .expect("required column checked by rule match");

    let rows = match rule.country {
        CountrySource::Column(name) => {
            let country_idx = table
                .column_index(name)
                .expect("required column checked by rule match");
            table
                .rows
                .iter()
                .map(|row| LongRow {
                    country_name: row[country_idx].clone(),
                    year: row[year_idx].clone(),
                    value: row[value_idx].clone(),
                })
                .collect()
        }
        CountrySource::Literal(literal) => table
            .rows
            .iter()
            .map(|row| LongRow {
                country_name: literal.to_string(),
                year: row[year_idx].clone(),
                value: row[value_idx].clone(),
            })
            .collect(),
    };

    Ok(LongTable {
        layout: rule.name,
        rows,
    })
}

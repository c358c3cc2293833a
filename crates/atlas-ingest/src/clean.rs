//! Series cleaning: type-coerce the long format and drop unusable rows.

use std::path::Path;

use tracing::debug;

use atlas_model::{IndicatorSeries, Metric, Observation};

use crate::error::Result;
use crate::layout::{LongTable, normalize_layout};
use crate::parse::{parse_f64, parse_year};
use crate::table::read_raw_table;

/// Clean a normalized long table into a typed series.
///
/// Rows missing a coercible `year` or `value` are dropped; both fields
/// are mandatory. `country_name` is trimmed but otherwise passed
/// through; an empty string survives as a country key.
pub fn clean_series(long: &LongTable, metric: Metric) -> IndicatorSeries {
    let mut rows = Vec::with_capacity(long.rows.len());
    let mut dropped = 0usize;
    for row in &long.rows {
        let (Some(year), Some(value)) = (parse_year(&row.year), parse_f64(&row.value)) else {
            dropped += 1;
            continue;
        };
        rows.push(Observation {
            country_name: row.country_name.trim().to_string(),
            year,
            value,
        });
    }
    if dropped > 0 {
        debug!(metric = %metric, dropped, kept = rows.len(), "dropped unusable rows");
    }
    IndicatorSeries::new(metric, rows)
}

/// Read, normalize, and clean one source file into a typed series.
pub fn load_series(path: &Path, metric: Metric) -> Result<IndicatorSeries> {
    let raw = read_raw_table(path)?;
    let long = normalize_layout(&raw, path)?;
    Ok(clean_series(&long, metric))
}

//! Outer-join reconciliation of the three cleaned series.
//!
//! Every `(country_name, year)` pair appearing in any input survives
//! the merge. Duplicate keys within one input are not deduplicated:
//! the join emits the full cross-product of matching rows for that
//! key, mirroring the upstream sources as-is.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use atlas_model::{IndicatorSeries, MergedRow, Metric};

use crate::fill::forward_fill;

type Key = (String, i64);

/// Outer-join one metric series into the accumulated merged rows.
fn join_metric(merged: Vec<MergedRow>, series: &IndicatorSeries) -> Vec<MergedRow> {
    let metric = series.metric;

    let mut left: BTreeMap<Key, Vec<MergedRow>> = BTreeMap::new();
    for row in merged {
        let key = (row.country_name.clone(), row.year);
        left.entry(key).or_default().push(row);
    }
    let mut right: BTreeMap<Key, Vec<f64>> = BTreeMap::new();
    for obs in &series.rows {
        let key = (obs.country_name.clone(), obs.year);
        right.entry(key).or_default().push(obs.value);
    }

    let mut keys: BTreeSet<&Key> = left.keys().collect();
    keys.extend(right.keys());

    let mut out = Vec::new();
    for key in keys {
        match (left.get(key), right.get(key)) {
            (Some(rows), Some(values)) => {
                // Duplicate keys on either side: full cross-product.
                for row in rows {
                    for value in values {
                        let mut joined = row.clone();
                        joined.set_value(metric, Some(*value));
                        out.push(joined);
                    }
                }
            }
            (Some(rows), None) => out.extend(rows.iter().cloned()),
            (None, Some(values)) => {
                for value in values {
                    let mut row = MergedRow::new(key.0.clone(), key.1);
                    row.set_value(metric, Some(*value));
                    out.push(row);
                }
            }
            (None, None) => {}
        }
    }
    out
}

/// Replace negative metric values with null.
///
/// A negative intake is invalid data, not a zero: the slot is cleared
/// and may later be forward-filled from an earlier valid value.
fn sanitize_negatives(rows: &mut [MergedRow]) {
    let mut cleared = 0usize;
    for row in rows {
        for slot in &mut row.values {
            if let Some(value) = *slot
                && value < 0.0
            {
                *slot = None;
                cleared += 1;
            }
        }
    }
    if cleared > 0 {
        debug!(cleared, "replaced negative values with null");
    }
}

/// Stable sort into the canonical `(country_name, year)` order.
///
/// The ordering is a structural invariant of the output: downstream
/// recency queries assume it.
fn sort_rows(rows: &mut [MergedRow]) {
    rows.sort_by(|a, b| {
        a.country_name
            .cmp(&b.country_name)
            .then(a.year.cmp(&b.year))
    });
}

/// Merge the three cleaned series into the canonical row set.
///
/// Join, sanitize, sort, then forward-fill per country. The returned
/// rows are in final `(country_name, year)` order.
pub fn merge_series(
    population: &IndicatorSeries,
    gdp: &IndicatorSeries,
    co2: &IndicatorSeries,
) -> Vec<MergedRow> {
    let mut rows = join_metric(Vec::new(), population);
    rows = join_metric(rows, gdp);
    rows = join_metric(rows, co2);
    sanitize_negatives(&mut rows);
    sort_rows(&mut rows);
    forward_fill(&mut rows);
    debug!(
        rows = rows.len(),
        population = population.len(),
        gdp = gdp.len(),
        co2 = co2.len(),
        "merged series"
    );
    rows
}

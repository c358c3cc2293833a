//! Plain-text data-quality profile of the merged table.
//!
//! A lightweight summary written next to the cleaned output: row count,
//! columns, per-column missing counts, and numeric ranges. Charting is
//! out of scope; this is the text companion downstream analysts skim
//! before trusting a fresh snapshot.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use atlas_model::{MergedRow, Metric, clean_columns};

/// Min/max range of a numeric column, if any value is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

/// Summary statistics of one merged snapshot.
#[derive(Debug, Clone)]
pub struct QualityProfile {
    pub rows: usize,
    /// Missing-value count per metric column, in canonical order.
    pub missing: [(Metric, usize); 3],
    pub year_range: Option<(i64, i64)>,
    /// Value range per metric column, in canonical order.
    pub ranges: [(Metric, Option<ColumnRange>); 3],
}

/// Compute the quality profile of a merged row set.
pub fn profile_rows(rows: &[MergedRow]) -> QualityProfile {
    let mut missing = Metric::ALL.map(|metric| (metric, 0usize));
    let mut ranges: [(Metric, Option<ColumnRange>); 3] = Metric::ALL.map(|metric| (metric, None));
    let mut year_range: Option<(i64, i64)> = None;

    for row in rows {
        year_range = Some(match year_range {
            Some((min, max)) => (min.min(row.year), max.max(row.year)),
            None => (row.year, row.year),
        });
        for metric in Metric::ALL {
            match row.value(metric) {
                Some(value) => {
                    let range = &mut ranges[metric.index()].1;
                    *range = Some(match *range {
                        Some(r) => ColumnRange {
                            min: r.min.min(value),
                            max: r.max.max(value),
                        },
                        None => ColumnRange {
                            min: value,
                            max: value,
                        },
                    });
                }
                None => missing[metric.index()].1 += 1,
            }
        }
    }

    QualityProfile {
        rows: rows.len(),
        missing,
        year_range,
        ranges,
    }
}

impl QualityProfile {
    /// Render the profile as the text summary format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Dataset Summary ===");
        let _ = writeln!(out, "Rows: {}", self.rows);
        let _ = writeln!(out, "Columns: {}", clean_columns().join(", "));
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Missing Values ===");
        for (metric, count) in &self.missing {
            let _ = writeln!(out, "{metric}: {count}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Numeric Ranges ===");
        match self.year_range {
            Some((min, max)) => {
                let _ = writeln!(out, "year: {min} .. {max}");
            }
            None => {
                let _ = writeln!(out, "year: (no rows)");
            }
        }
        for (metric, range) in &self.ranges {
            match range {
                Some(r) => {
                    let _ = writeln!(out, "{metric}: {} .. {}", r.min, r.max);
                }
                None => {
                    let _ = writeln!(out, "{metric}: (all missing)");
                }
            }
        }
        out
    }

    /// Write the rendered profile to a file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create report dir: {}", parent.display()))?;
        }
        fs::write(path, self.render())
            .with_context(|| format!("write profile: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_missing_and_tracks_ranges() {
        let mut a = MergedRow::new("A", 2000);
        a.set_value(Metric::Population, Some(100.0));
        a.set_value(Metric::Gdp, Some(50.0));
        let mut b = MergedRow::new("A", 2001);
        b.set_value(Metric::Population, Some(120.0));

        let profile = profile_rows(&[a, b]);
        assert_eq!(profile.rows, 2);
        assert_eq!(profile.year_range, Some((2000, 2001)));
        assert_eq!(profile.missing[Metric::Gdp.index()].1, 1);
        assert_eq!(profile.missing[Metric::Co2Emissions.index()].1, 2);
        assert_eq!(
            profile.ranges[Metric::Population.index()].1,
            Some(ColumnRange {
                min: 100.0,
                max: 120.0
            })
        );
        assert_eq!(profile.ranges[Metric::Co2Emissions.index()].1, None);
    }

    #[test]
    fn renders_empty_snapshot() {
        let profile = profile_rows(&[]);
        let text = profile.render();
        assert!(text.contains("Rows: 0"));
        assert!(text.contains("year: (no rows)"));
    }
}

//! The validation suite.
//!
//! Checks run in a fixed order against a live warehouse handle. Hard
//! checks short-circuit: the first failure aborts the run after its
//! outcome is logged, so diagnostics from already-run checks stay
//! visible. Soft checks only report.

use serde::Serialize;
use tracing::{error, info, warn};

use atlas_model::{Metric, clean_columns};
use atlas_store::Warehouse;

use crate::error::{Result, ValidationFailure};

/// Null-`gdp` fraction must stay strictly below this limit.
pub const GDP_MISSING_RATIO_LIMIT: f64 = 0.20;

/// Plausible calendar window for the `year` column.
pub const YEAR_MIN: i64 = 1700;
/// Plausible calendar window for the `year` column.
pub const YEAR_MAX: i64 = 2100;

/// The checks of the suite, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Existence,
    Schema,
    MissingRatio,
    YearRange,
    Correlation,
}

impl CheckKind {
    /// All checks in execution order.
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Existence,
        CheckKind::Schema,
        CheckKind::MissingRatio,
        CheckKind::YearRange,
        CheckKind::Correlation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Existence => "existence",
            CheckKind::Schema => "schema",
            CheckKind::MissingRatio => "missing_ratio",
            CheckKind::YearRange => "year_range",
            CheckKind::Correlation => "correlation",
        }
    }

    /// Hard checks abort the run on failure; soft checks only report.
    pub fn is_hard(self) -> bool {
        !matches!(self, CheckKind::Correlation)
    }

    /// What the check enforces, for listings.
    pub fn rule(self) -> &'static str {
        match self {
            CheckKind::Existence => "canonical table exists and has rows",
            CheckKind::Schema => "all canonical columns present",
            CheckKind::MissingRatio => "null gdp fraction strictly below 0.20",
            CheckKind::YearRange => "year bounds within [1700, 2100]",
            CheckKind::Correlation => "gdp/co2 correlation reported (informational)",
        }
    }
}

/// Outcome of one executed check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub passed: bool,
    pub detail: String,
}

/// Outcomes of one validation run over a table snapshot.
///
/// Consumed immediately by the caller; not persisted by the suite
/// itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub outcomes: Vec<CheckOutcome>,
    /// Pearson gdp/co2 correlation, when defined.
    pub correlation: Option<f64>,
}

impl ValidationReport {
    fn record_pass(&mut self, check: CheckKind, detail: String) {
        info!(check = check.as_str(), %detail, "check passed");
        self.outcomes.push(CheckOutcome {
            check,
            passed: true,
            detail,
        });
    }
}

/// Log a hard failure before surfacing it.
fn fail(failure: ValidationFailure) -> ValidationFailure {
    error!(failure = %failure, "check failed");
    failure
}

/// Run all checks in order against the named table.
///
/// Returns the full report when every hard check passes; the first
/// hard failure aborts with [`crate::ValidateError::Failure`] and later
/// checks do not run.
pub fn run_checks(warehouse: &dyn Warehouse, table: &str) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();
    check_existence(warehouse, table, &mut report)?;
    check_schema(warehouse, table, &mut report)?;
    check_missing_ratio(warehouse, table, &mut report)?;
    check_year_range(warehouse, table, &mut report)?;
    check_correlation(warehouse, table, &mut report)?;
    Ok(report)
}

fn check_existence(
    warehouse: &dyn Warehouse,
    table: &str,
    report: &mut ValidationReport,
) -> Result<()> {
    if !warehouse.table_exists(table) {
        return Err(fail(ValidationFailure::TableMissing {
            table: table.to_string(),
        })
        .into());
    }
    let rows = warehouse.row_count(table)?;
    if rows == 0 {
        return Err(fail(ValidationFailure::EmptyTable {
            table: table.to_string(),
        })
        .into());
    }
    report.record_pass(CheckKind::Existence, format!("{rows} rows"));
    Ok(())
}

fn check_schema(
    warehouse: &dyn Warehouse,
    table: &str,
    report: &mut ValidationReport,
) -> Result<()> {
    let found = warehouse.columns(table)?;
    let missing: Vec<String> = clean_columns()
        .iter()
        .filter(|expected| !found.iter().any(|column| column == *expected))
        .map(|expected| (*expected).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(fail(ValidationFailure::MissingColumns { missing, found }).into());
    }
    report.record_pass(
        CheckKind::Schema,
        format!("all expected columns present ({} total)", found.len()),
    );
    Ok(())
}

fn check_missing_ratio(
    warehouse: &dyn Warehouse,
    table: &str,
    report: &mut ValidationReport,
) -> Result<()> {
    let column = Metric::Gdp.column_name();
    let total = warehouse.row_count(table)?;
    let nulls = warehouse.null_count(table, column)?;
    // total > 0 is guaranteed: the existence check ran first.
    let ratio = nulls as f64 / total as f64;
    if ratio >= GDP_MISSING_RATIO_LIMIT {
        return Err(fail(ValidationFailure::MissingRatio {
            column: column.to_string(),
            nulls,
            total,
            ratio,
            limit: GDP_MISSING_RATIO_LIMIT,
        })
        .into());
    }
    report.record_pass(
        CheckKind::MissingRatio,
        format!("{nulls}/{total} null {column} values (ratio {ratio:.3})"),
    );
    Ok(())
}

fn check_year_range(
    warehouse: &dyn Warehouse,
    table: &str,
    report: &mut ValidationReport,
) -> Result<()> {
    let Some((min, max)) = warehouse.min_max(table, atlas_model::YEAR)? else {
        return Err(fail(ValidationFailure::NoYearValues {
            column: atlas_model::YEAR.to_string(),
        })
        .into());
    };
    let (min, max) = (min as i64, max as i64);
    for (bound, year) in [("minimum", min), ("maximum", max)] {
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            return Err(fail(ValidationFailure::YearOutOfRange {
                bound,
                year,
                min: YEAR_MIN,
                max: YEAR_MAX,
            })
            .into());
        }
    }
    report.record_pass(CheckKind::YearRange, format!("years {min} .. {max}"));
    Ok(())
}

fn check_correlation(
    warehouse: &dyn Warehouse,
    table: &str,
    report: &mut ValidationReport,
) -> Result<()> {
    let correlation = warehouse.correlation(
        table,
        Metric::Gdp.column_name(),
        Metric::Co2Emissions.column_name(),
    )?;
    let detail = match correlation {
        None => "skipped: fewer than 2 qualifying rows".to_string(),
        Some(value) if value < 0.0 => {
            warn!(correlation = value, "negative gdp/co2 correlation (unexpected pattern)");
            format!("{value:.3} (negative, unexpected pattern)")
        }
        Some(value) => format!("{value:.3} (positive, plausible economic relationship)"),
    };
    report.correlation = correlation;
    report.record_pass(CheckKind::Correlation, detail);
    Ok(())
}

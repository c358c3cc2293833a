//! Validator suite behavior against an in-memory warehouse.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use atlas_model::CLEAN_TABLE;
use atlas_store::{MemoryWarehouse, Warehouse};
use atlas_validate::{CheckKind, ValidateError, ValidationFailure, run_checks};

fn canonical_frame(
    years: Vec<i64>,
    population: Vec<Option<f64>>,
    gdp: Vec<Option<f64>>,
    co2: Vec<Option<f64>>,
) -> DataFrame {
    let countries: Vec<String> = years.iter().map(|_| "A".to_string()).collect();
    let columns: Vec<Column> = vec![
        Series::new("country_name".into(), countries).into(),
        Series::new("year".into(), years).into(),
        Series::new("population".into(), population).into(),
        Series::new("gdp".into(), gdp).into(),
        Series::new("co2_emissions".into(), co2).into(),
    ];
    DataFrame::new(columns).unwrap()
}

fn warehouse_with(frame: DataFrame) -> MemoryWarehouse {
    let mut warehouse = MemoryWarehouse::new();
    warehouse.replace(CLEAN_TABLE, frame).unwrap();
    warehouse
}

#[test]
fn clean_snapshot_passes_all_checks() {
    let warehouse = warehouse_with(canonical_frame(
        vec![2000, 2001, 2002],
        vec![Some(100.0), Some(110.0), Some(120.0)],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(10.0), Some(20.0), Some(30.0)],
    ));

    let report = run_checks(&warehouse, CLEAN_TABLE).unwrap();
    let kinds: Vec<CheckKind> = report.outcomes.iter().map(|o| o.check).collect();
    assert_eq!(kinds, CheckKind::ALL.to_vec());
    assert!(report.outcomes.iter().all(|o| o.passed));
    let corr = report.correlation.unwrap();
    assert!((corr - 1.0).abs() < 1e-12);
}

#[test]
fn missing_table_fails_existence() {
    let warehouse = MemoryWarehouse::new();
    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::Failure(ValidationFailure::TableMissing { .. })
    ));
}

#[test]
fn empty_table_fails_existence() {
    let warehouse = warehouse_with(canonical_frame(vec![], vec![], vec![], vec![]));
    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::Failure(ValidationFailure::EmptyTable { .. })
    ));
}

#[test]
fn schema_failure_short_circuits_before_missing_ratio() {
    // No gdp column at all: were the missing-ratio check to run first,
    // it would surface a store error instead of the schema failure.
    let columns: Vec<Column> = vec![
        Series::new("country_name".into(), vec!["A"]).into(),
        Series::new("year".into(), vec![2000i64]).into(),
        Series::new("population".into(), vec![Some(1.0)]).into(),
        Series::new("co2_emissions".into(), vec![Some(1.0)]).into(),
    ];
    let warehouse = warehouse_with(DataFrame::new(columns).unwrap());

    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    match err {
        ValidateError::Failure(ValidationFailure::MissingColumns { missing, .. }) => {
            assert_eq!(missing, vec!["gdp".to_string()]);
        }
        other => panic!("expected schema failure, got {other:?}"),
    }
}

#[test]
fn extra_columns_are_allowed() {
    let mut frame = canonical_frame(
        vec![2000, 2001],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
    );
    frame
        .with_column(Series::new("iso_code".into(), vec!["ABW", "ABW"]))
        .unwrap();
    let warehouse = warehouse_with(frame);
    assert!(run_checks(&warehouse, CLEAN_TABLE).is_ok());
}

#[test]
fn gdp_missing_ratio_at_limit_fails() {
    // 25 of 100 rows null: ratio 0.25 >= 0.20.
    let years: Vec<i64> = (0..100).map(|i| 2000 + (i % 20)).collect();
    let gdp: Vec<Option<f64>> = (0..100)
        .map(|i| if i < 25 { None } else { Some(1.0 + i as f64) })
        .collect();
    let filled: Vec<Option<f64>> = (0..100).map(|i| Some(i as f64)).collect();
    let warehouse = warehouse_with(canonical_frame(
        years,
        filled.clone(),
        gdp,
        filled,
    ));

    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    match err {
        ValidateError::Failure(ValidationFailure::MissingRatio { ratio, limit, .. }) => {
            assert!((ratio - 0.25).abs() < 1e-12);
            assert!((limit - 0.20).abs() < 1e-12);
        }
        other => panic!("expected missing-ratio failure, got {other:?}"),
    }
}

#[test]
fn gdp_missing_ratio_boundary_is_strict() {
    // Exactly 0.20 must fail: the rule is strictly-less-than.
    let years: Vec<i64> = (0..5).map(|i| 2000 + i).collect();
    let gdp = vec![None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)];
    let filled: Vec<Option<f64>> = (0..5).map(|i| Some(i as f64)).collect();
    let warehouse = warehouse_with(canonical_frame(years, filled.clone(), gdp, filled));

    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::Failure(ValidationFailure::MissingRatio { .. })
    ));
}

#[test]
fn year_out_of_range_fails_with_bound() {
    let warehouse = warehouse_with(canonical_frame(
        vec![1492, 2000],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
        vec![Some(1.0), Some(2.0)],
    ));

    let err = run_checks(&warehouse, CLEAN_TABLE).unwrap_err();
    match err {
        ValidateError::Failure(ValidationFailure::YearOutOfRange { bound, year, .. }) => {
            assert_eq!(bound, "minimum");
            assert_eq!(year, 1492);
        }
        other => panic!("expected year-range failure, got {other:?}"),
    }
}

#[test]
fn undefined_correlation_is_skipped_not_failed() {
    // Only one row where both gdp and co2 are non-null; gdp itself is
    // fully populated so the missing-ratio check stays green.
    let warehouse = warehouse_with(canonical_frame(
        vec![2000, 2001, 2002],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(10.0), None, None],
    ));

    let report = run_checks(&warehouse, CLEAN_TABLE).unwrap();
    assert_eq!(report.correlation, None);
    let correlation = report
        .outcomes
        .iter()
        .find(|o| o.check == CheckKind::Correlation)
        .unwrap();
    assert!(correlation.passed);
    assert!(correlation.detail.contains("skipped"));
}

#[test]
fn negative_correlation_is_reported_not_failed() {
    let warehouse = warehouse_with(canonical_frame(
        vec![2000, 2001, 2002],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(1.0), Some(2.0), Some(3.0)],
        vec![Some(30.0), Some(20.0), Some(10.0)],
    ));

    let report = run_checks(&warehouse, CLEAN_TABLE).unwrap();
    let corr = report.correlation.unwrap();
    assert!(corr < 0.0);
    assert!(report.outcomes.iter().all(|o| o.passed));
}

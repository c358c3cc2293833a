//! End-to-end merge engine behavior.

use atlas_model::{IndicatorSeries, Metric, Observation};
use atlas_transform::merge_series;

fn series(metric: Metric, rows: Vec<(&str, i64, f64)>) -> IndicatorSeries {
    IndicatorSeries::new(
        metric,
        rows.into_iter()
            .map(|(country, year, value)| Observation::new(country, year, value))
            .collect(),
    )
}

fn empty(metric: Metric) -> IndicatorSeries {
    IndicatorSeries::new(metric, Vec::new())
}

#[test]
fn reconciles_partial_series_with_forward_fill() {
    // Population known only at 2000, GDP only at 2000, CO2 only at 2001:
    // 2001 inherits population and GDP from 2000, CO2 stays observed.
    let population = series(Metric::Population, vec![("A", 2000, 100.0)]);
    let gdp = series(Metric::Gdp, vec![("A", 2000, 50.0)]);
    let co2 = series(Metric::Co2Emissions, vec![("A", 2001, 30.0)]);

    let rows = merge_series(&population, &gdp, &co2);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].year, 2000);
    assert_eq!(rows[0].value(Metric::Population), Some(100.0));
    assert_eq!(rows[0].value(Metric::Gdp), Some(50.0));
    assert_eq!(rows[0].value(Metric::Co2Emissions), None);

    assert_eq!(rows[1].year, 2001);
    assert_eq!(rows[1].value(Metric::Population), Some(100.0));
    assert_eq!(rows[1].value(Metric::Gdp), Some(50.0));
    assert_eq!(rows[1].value(Metric::Co2Emissions), Some(30.0));
}

#[test]
fn outer_join_keeps_every_key_from_any_input() {
    let population = series(Metric::Population, vec![("A", 2000, 1.0)]);
    let gdp = series(Metric::Gdp, vec![("B", 1990, 2.0)]);
    let co2 = series(Metric::Co2Emissions, vec![("C", 2010, 3.0)]);

    let rows = merge_series(&population, &gdp, &co2);
    let keys: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| (row.country_name.as_str(), row.year))
        .collect();
    assert_eq!(keys, vec![("A", 2000), ("B", 1990), ("C", 2010)]);
}

#[test]
fn negative_values_are_nulled_then_fillable() {
    let gdp = series(Metric::Gdp, vec![("A", 2000, 50.0), ("A", 2001, -1.0)]);
    let rows = merge_series(
        &empty(Metric::Population),
        &gdp,
        &empty(Metric::Co2Emissions),
    );
    // The negative 2001 value is invalid; the fill repairs it from 2000.
    assert_eq!(rows[1].value(Metric::Gdp), Some(50.0));
    assert!(rows.iter().all(|row| row
        .value(Metric::Gdp)
        .is_none_or(|value| value >= 0.0)));
}

#[test]
fn leading_negative_stays_null() {
    let gdp = series(Metric::Gdp, vec![("A", 2000, -1.0), ("A", 2001, 7.0)]);
    let rows = merge_series(
        &empty(Metric::Population),
        &gdp,
        &empty(Metric::Co2Emissions),
    );
    assert_eq!(rows[0].value(Metric::Gdp), None);
    assert_eq!(rows[1].value(Metric::Gdp), Some(7.0));
}

#[test]
fn duplicate_keys_produce_cross_product() {
    let population = series(
        Metric::Population,
        vec![("A", 2000, 100.0), ("A", 2000, 101.0)],
    );
    let gdp = series(Metric::Gdp, vec![("A", 2000, 50.0)]);
    let rows = merge_series(&population, &gdp, &empty(Metric::Co2Emissions));

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.value(Metric::Gdp) == Some(50.0)));
    let populations: Vec<Option<f64>> = rows
        .iter()
        .map(|row| row.value(Metric::Population))
        .collect();
    assert!(populations.contains(&Some(100.0)));
    assert!(populations.contains(&Some(101.0)));
}

#[test]
fn output_is_sorted_by_country_then_year() {
    let population = series(
        Metric::Population,
        vec![("B", 2001, 1.0), ("A", 2005, 2.0), ("B", 1999, 3.0), ("A", 2000, 4.0)],
    );
    let rows = merge_series(
        &population,
        &empty(Metric::Gdp),
        &empty(Metric::Co2Emissions),
    );
    let keys: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| (row.country_name.as_str(), row.year))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn merge_is_idempotent_over_identical_inputs() {
    let population = series(
        Metric::Population,
        vec![("A", 2000, 100.0), ("B", 2001, 7.0), ("A", 2001, 0.0)],
    );
    let gdp = series(Metric::Gdp, vec![("A", 2000, 50.0), ("B", 2000, -2.0)]);
    let co2 = series(Metric::Co2Emissions, vec![("A", 2001, 30.0)]);

    let first = merge_series(&population, &gdp, &co2);
    let second = merge_series(&population, &gdp, &co2);
    assert_eq!(first, second);
}

#[test]
fn fill_never_crosses_countries() {
    let gdp = series(Metric::Gdp, vec![("A", 2000, 50.0)]);
    let co2 = series(Metric::Co2Emissions, vec![("B", 2001, 30.0)]);
    let rows = merge_series(&empty(Metric::Population), &gdp, &co2);

    let b = rows.iter().find(|row| row.country_name == "B").unwrap();
    assert_eq!(b.value(Metric::Gdp), None);
}

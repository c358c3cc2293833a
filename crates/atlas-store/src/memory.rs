//! In-memory warehouse backing a single pipeline run.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::values::{any_to_f64, is_null};
use crate::warehouse::Warehouse;

/// DataFrame-backed warehouse holding one exclusive snapshot per table.
#[derive(Debug, Default)]
pub struct MemoryWarehouse {
    tables: BTreeMap<String, DataFrame>,
}

impl MemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, name: &str) -> Result<&DataFrame> {
        self.tables
            .get(name)
            .ok_or_else(|| StoreError::TableNotFound {
                name: name.to_string(),
            })
    }

    /// Non-null f64 values of one column, positionally (null = None).
    fn column_values(&self, name: &str, column: &str) -> Result<Vec<Option<f64>>> {
        let df = self.table(name)?;
        let series = df
            .column(column)
            .map_err(|_| StoreError::ColumnNotFound {
                table: name.to_string(),
                column: column.to_string(),
            })?;
        let mut values = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            values.push(any_to_f64(&value));
        }
        Ok(values)
    }
}

impl Warehouse for MemoryWarehouse {
    fn replace(&mut self, name: &str, frame: DataFrame) -> Result<()> {
        debug!(table = name, rows = frame.height(), "replacing table");
        self.tables.insert(name.to_string(), frame);
        Ok(())
    }

    fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    fn row_count(&self, name: &str) -> Result<usize> {
        Ok(self.table(name)?.height())
    }

    fn columns(&self, name: &str) -> Result<Vec<String>> {
        Ok(self
            .table(name)?
            .get_column_names()
            .iter()
            .map(|column| column.to_string())
            .collect())
    }

    fn null_count(&self, name: &str, column: &str) -> Result<usize> {
        let df = self.table(name)?;
        let series = df
            .column(column)
            .map_err(|_| StoreError::ColumnNotFound {
                table: name.to_string(),
                column: column.to_string(),
            })?;
        let mut nulls = 0usize;
        for idx in 0..df.height() {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            if is_null(&value) {
                nulls += 1;
            }
        }
        Ok(nulls)
    }

    fn min_max(&self, name: &str, column: &str) -> Result<Option<(f64, f64)>> {
        let values = self.column_values(name, column)?;
        let mut range: Option<(f64, f64)> = None;
        for value in values.into_iter().flatten() {
            range = Some(match range {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        Ok(range)
    }

    fn correlation(&self, name: &str, a: &str, b: &str) -> Result<Option<f64>> {
        let xs = self.column_values(name, a)?;
        let ys = self.column_values(name, b)?;
        let pairs: Vec<(f64, f64)> = xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| Some((x?, y?)))
            .collect();
        Ok(pearson(&pairs))
    }
}

/// Pearson correlation over paired samples.
///
/// Undefined (None) for fewer than 2 pairs or zero variance on either
/// side, matching a SQL `corr` aggregate returning NULL.
fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom, Series};

    fn frame(gdp: Vec<Option<f64>>, co2: Vec<Option<f64>>) -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("gdp".into(), gdp).into(),
            Series::new("co2_emissions".into(), co2).into(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn replace_is_drop_and_recreate() {
        let mut warehouse = MemoryWarehouse::new();
        warehouse
            .replace("clean_data", frame(vec![Some(1.0)], vec![Some(2.0)]))
            .unwrap();
        warehouse
            .replace(
                "clean_data",
                frame(vec![Some(1.0), Some(2.0)], vec![None, None]),
            )
            .unwrap();
        assert_eq!(warehouse.row_count("clean_data").unwrap(), 2);
        assert_eq!(warehouse.null_count("clean_data", "co2_emissions").unwrap(), 2);
    }

    #[test]
    fn missing_table_and_column_are_typed_errors() {
        let warehouse = MemoryWarehouse::new();
        assert!(matches!(
            warehouse.row_count("clean_data").unwrap_err(),
            StoreError::TableNotFound { .. }
        ));

        let mut warehouse = MemoryWarehouse::new();
        warehouse
            .replace("clean_data", frame(vec![Some(1.0)], vec![Some(2.0)]))
            .unwrap();
        assert!(matches!(
            warehouse.null_count("clean_data", "population").unwrap_err(),
            StoreError::ColumnNotFound { .. }
        ));
    }

    #[test]
    fn min_max_ignores_nulls() {
        let mut warehouse = MemoryWarehouse::new();
        warehouse
            .replace(
                "clean_data",
                frame(vec![Some(3.0), None, Some(-1.0)], vec![None, None, None]),
            )
            .unwrap();
        assert_eq!(
            warehouse.min_max("clean_data", "gdp").unwrap(),
            Some((-1.0, 3.0))
        );
        assert_eq!(warehouse.min_max("clean_data", "co2_emissions").unwrap(), None);
    }

    #[test]
    fn correlation_of_linear_data_is_one() {
        let mut warehouse = MemoryWarehouse::new();
        warehouse
            .replace(
                "clean_data",
                frame(
                    vec![Some(1.0), Some(2.0), Some(3.0)],
                    vec![Some(10.0), Some(20.0), Some(30.0)],
                ),
            )
            .unwrap();
        let corr = warehouse
            .correlation("clean_data", "gdp", "co2_emissions")
            .unwrap()
            .unwrap();
        assert!((corr - 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_undefined_for_few_rows_or_zero_variance() {
        let mut warehouse = MemoryWarehouse::new();
        // Only one row where both sides are non-null.
        warehouse
            .replace(
                "clean_data",
                frame(vec![Some(1.0), Some(2.0)], vec![Some(10.0), None]),
            )
            .unwrap();
        assert_eq!(
            warehouse
                .correlation("clean_data", "gdp", "co2_emissions")
                .unwrap(),
            None
        );

        // Constant left side.
        warehouse
            .replace(
                "clean_data",
                frame(
                    vec![Some(5.0), Some(5.0)],
                    vec![Some(10.0), Some(20.0)],
                ),
            )
            .unwrap();
        assert_eq!(
            warehouse
                .correlation("clean_data", "gdp", "co2_emissions")
                .unwrap(),
            None
        );
    }
}

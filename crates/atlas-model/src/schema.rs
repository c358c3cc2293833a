//! Canonical schema of the merged table.

use crate::Metric;

/// Name of the canonical table in the warehouse.
pub const CLEAN_TABLE: &str = "clean_data";

/// Country key column.
pub const COUNTRY_NAME: &str = "country_name";

/// Calendar year column.
pub const YEAR: &str = "year";

/// All columns of the canonical table, in output order.
pub fn clean_columns() -> [&'static str; 5] {
    [
        COUNTRY_NAME,
        YEAR,
        Metric::Population.column_name(),
        Metric::Gdp.column_name(),
        Metric::Co2Emissions.column_name(),
    ]
}

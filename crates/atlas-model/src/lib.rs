pub mod metric;
pub mod schema;
pub mod series;

pub use metric::Metric;
pub use schema::{CLEAN_TABLE, COUNTRY_NAME, YEAR, clean_columns};
pub use series::{IndicatorSeries, MergedRow, Observation};

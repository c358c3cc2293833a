pub mod clean;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod parse;
pub mod table;

pub use clean::{clean_series, load_series};
pub use discovery::{latest_source_file, list_csv_files, select_source_file};
pub use error::{IngestError, Result};
pub use layout::{CountrySource, LAYOUT_RULES, LayoutRule, LongRow, LongTable, normalize_layout};
pub use parse::{parse_f64, parse_year};
pub use table::{RawTable, normalize_column, read_raw_table};

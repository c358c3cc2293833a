pub mod csv_io;
pub mod error;
pub mod memory;
pub mod values;
pub mod warehouse;

pub use csv_io::{read_table_csv, write_table_csv};
pub use error::{Result, StoreError};
pub use memory::MemoryWarehouse;
pub use values::{any_to_f64, is_null};
pub use warehouse::Warehouse;

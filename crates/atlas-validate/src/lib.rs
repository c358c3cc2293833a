pub mod checks;
pub mod error;
pub mod report;

pub use checks::{
    CheckKind, CheckOutcome, GDP_MISSING_RATIO_LIMIT, ValidationReport, YEAR_MAX, YEAR_MIN,
    run_checks,
};
pub use error::{Result, ValidateError, ValidationFailure};
pub use report::write_validation_report_json;

pub mod fill;
pub mod frame;
pub mod merge;
pub mod profile;

pub use fill::forward_fill;
pub use frame::{CleanFrame, CleanFrameMeta, build_clean_frame};
pub use merge::merge_series;
pub use profile::{ColumnRange, QualityProfile, profile_rows};

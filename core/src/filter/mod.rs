//! Search criteria as the user edits them, before transport encoding.

pub mod range;
pub mod sort;
pub mod state;
pub mod toggle;
pub mod validate;
pub mod vocab;

pub use range::{QualityRange, RangeField, QUALITY_MAX, QUALITY_MIN};
pub use sort::SortKey;
pub use state::{FilterState, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use toggle::ToggleSet;
pub use validate::validate;

// core/src/errors/filter_error.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("page must be >= 1 (got {0})")]
    InvalidPage(u32),

    #[error("perPage must be between 1 and {max} (got {got})")]
    InvalidPerPage { got: u32, max: u32 },

    #[error("{param} is not a number: {value:?}")]
    NotANumber { param: &'static str, value: String },

    #[error("{param} must not be negative (got {value})")]
    Negative { param: &'static str, value: String },

    #[error("{min_param} ({min}) is greater than {max_param} ({max})")]
    InvertedRange {
        min_param: &'static str,
        max_param: &'static str,
        min: String,
        max: String,
    },

    #[error("{param} must be within 0..=100 (got {value})")]
    QualityOutOfDomain { param: &'static str, value: u8 },

    #[error("unknown sort key: {0}")]
    UnknownSort(String),
}

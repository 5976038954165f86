// core/src/errors/pager_error.rs
use thiserror::Error;

use super::FilterError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PagerError {
    #[error("a search request is already in flight")]
    Busy,

    #[error("no filter has been submitted yet")]
    NoFilter,

    #[error("page {requested} is outside 1..={total_pages}")]
    OutOfRange { requested: u32, total_pages: u32 },

    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),
}

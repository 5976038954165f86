// core/src/errors/store_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("insert rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("store unavailable: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("row encode error")]
    Encode(#[source] serde_json::Error),
}

// core/src/errors/upstream_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Failed to fetch data: {status} {reason}")]
    HttpStatus {
        status: u16,
        reason: String,
        body_snippet: String,
    },

    #[error("request timeout")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("malformed response body: {0}")]
    Decode(#[source] anyhow::Error),
}

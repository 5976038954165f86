// core/src/errors/cli_error.rs
use thiserror::Error;

use super::{ConfigError, GatewayError, PagerError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("pager error: {0}")]
    Pager(#[from] PagerError),

    #[error("plugin error: {0}")]
    Plugin(#[source] anyhow::Error),

    #[error("command failed: {0}")]
    Command(String),
}

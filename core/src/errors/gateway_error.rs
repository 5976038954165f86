// core/src/errors/gateway_error.rs
use std::fmt;

use thiserror::Error;

use super::{ConfigError, FilterError, StoreError, UpstreamError};

/// Which step of a gateway invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayStage {
    Config,
    Validation,
    Upstream,
    Persistence,
}

impl fmt::Display for GatewayStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GatewayStage::Config => "config",
            GatewayStage::Validation => "validation",
            GatewayStage::Upstream => "upstream",
            GatewayStage::Persistence => "persistence",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Supabase insert error: {0}")]
    Persistence(#[from] StoreError),
}

impl GatewayError {
    pub fn stage(&self) -> GatewayStage {
        match self {
            GatewayError::Config(_) => GatewayStage::Config,
            GatewayError::Filter(_) => GatewayStage::Validation,
            GatewayError::Upstream(_) => GatewayStage::Upstream,
            GatewayError::Persistence(_) => GatewayStage::Persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_every_missing_setting() {
        let err = GatewayError::from(ConfigError::Missing(vec![
            "RAPIDAPI_KEY",
            "SUPABASE_SERVICE_ROLE_KEY",
        ]));
        assert_eq!(err.stage(), GatewayStage::Config);
        let msg = err.to_string();
        assert!(msg.contains("RAPIDAPI_KEY"));
        assert!(msg.contains("SUPABASE_SERVICE_ROLE_KEY"));
    }

    #[test]
    fn upstream_and_persistence_are_distinct_stages() {
        let upstream = GatewayError::from(UpstreamError::HttpStatus {
            status: 503,
            reason: "Service Unavailable".into(),
            body_snippet: String::new(),
        });
        let store = GatewayError::from(StoreError::Rejected {
            status: 409,
            message: "duplicate key".into(),
        });

        assert_eq!(upstream.stage(), GatewayStage::Upstream);
        assert_eq!(store.stage(), GatewayStage::Persistence);
        assert_eq!(
            upstream.to_string(),
            "Failed to fetch data: 503 Service Unavailable"
        );
        assert!(store.to_string().starts_with("Supabase insert error"));
    }
}

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{StoreError, UpstreamError};
use crate::query::QueryParams;

/// The two header credentials of the statistics API.
#[derive(Clone)]
pub struct ApiCredentials {
    pub api_key: String,
    pub host: String,
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

/// Where a raw row goes.
#[derive(Clone)]
pub struct StoreTarget {
    pub url: String,
    pub service_key: String,
    pub table: String,
}

impl fmt::Debug for StoreTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreTarget")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

/// One opaque ingest row: the verbatim payload and when it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRow {
    pub data: Value,
    pub created_at: String,
}

#[async_trait]
pub trait StatsApi: Send + Sync {
    fn name(&self) -> &str;

    /// One GET against the search endpoint, returning the decoded body.
    async fn search(
        &self,
        creds: &ApiCredentials,
        params: &QueryParams,
    ) -> Result<Value, UpstreamError>;
}

#[async_trait]
pub trait RawStore: Send + Sync {
    fn name(&self) -> &str;

    async fn insert(&self, target: &StoreTarget, row: RawRow) -> Result<(), StoreError>;
}

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::errors::GatewayError;
use crate::filter::FilterState;
use crate::query::build_validated;
use crate::search::{normalize_response, SearchResult};

use super::settings::GatewaySettings;
use super::transport::StatsApi;
use super::SearchGateway;

/// Forwards a caller's filter to the search endpoint.
pub struct QueryGateway {
    settings: GatewaySettings,
    api: Arc<dyn StatsApi>,
}

impl QueryGateway {
    pub fn new(settings: GatewaySettings, api: Arc<dyn StatsApi>) -> Self {
        Self { settings, api }
    }

    /// Returns the decoded body untouched.
    #[instrument(name = "query", skip_all, fields(api = self.api.name(), page = filter.page))]
    pub async fn query(&self, filter: &FilterState) -> Result<Value, GatewayError> {
        let params = build_validated(filter)?;
        let creds = self.settings.api_credentials()?;
        debug!(?params, "forwarding search");

        self.api.search(&creds, &params).await.map_err(|e| {
            warn!(error = %e, "search endpoint failed");
            GatewayError::from(e)
        })
    }
}

#[async_trait]
impl SearchGateway for QueryGateway {
    async fn search(&self, filter: &FilterState) -> Result<SearchResult, GatewayError> {
        let raw = self.query(filter).await?;
        Ok(normalize_response(&raw)?)
    }
}

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{error, info, instrument};

use crate::errors::GatewayError;
use crate::query::{build_validated, ingest_filter};

use super::settings::GatewaySettings;
use super::transport::{RawRow, RawStore, StatsApi};

pub const INGEST_OK_MESSAGE: &str = "Data inserted successfully";

/// What a successful ingest wrote.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub message: String,
    pub created_at: String,
    /// Profiles in the stored payload, when it has a `data` list.
    pub profiles: Option<usize>,
}

/// Fetches the fixed crawl query and stores the raw body as one row.
pub struct IngestGateway {
    settings: GatewaySettings,
    api: Arc<dyn StatsApi>,
    store: Arc<dyn RawStore>,
}

impl IngestGateway {
    pub fn new(
        settings: GatewaySettings,
        api: Arc<dyn StatsApi>,
        store: Arc<dyn RawStore>,
    ) -> Self {
        Self {
            settings,
            api,
            store,
        }
    }

    #[instrument(name = "ingest", skip(self), fields(api = self.api.name(), store = self.store.name()))]
    pub async fn run(&self) -> Result<IngestReport, GatewayError> {
        let (creds, target) = self.settings.ingest_targets().map_err(|e| {
            error!(missing = ?e.missing(), "ingest aborted before any call");
            e
        })?;

        let params = build_validated(&ingest_filter())?;
        info!(params = params.len(), "fetching crawl page");

        let data = self.api.search(&creds, &params).await.map_err(|e| {
            error!(error = %e, "search endpoint failed");
            e
        })?;
        let profiles = data.get("data").and_then(|d| d.as_array()).map(Vec::len);

        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let row = RawRow {
            data,
            created_at: created_at.clone(),
        };
        self.store.insert(&target, row).await.map_err(|e| {
            error!(error = %e, table = %target.table, "raw insert failed");
            e
        })?;

        info!(?profiles, %created_at, "raw payload stored");
        Ok(IngestReport {
            message: INGEST_OK_MESSAGE.to_string(),
            created_at,
            profiles,
        })
    }
}

use crate::config::{ApiProvider, AppConfig, StoreProvider};
use crate::errors::ConfigError;

use super::transport::{ApiCredentials, StoreTarget};

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const STORE_URL_VAR: &str = "SUPABASE_URL";
pub const STORE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Credentials and targets handed to a gateway at construction.
///
/// Every credential is optional here; a gateway checks for the ones it needs
/// on each invocation, before any outbound call.
#[derive(Clone, Default)]
pub struct GatewaySettings {
    pub api_key: Option<String>,
    pub api_host: String,
    pub store_url: Option<String>,
    pub store_service_key: Option<String>,
    pub store_table: String,
}

impl std::fmt::Debug for GatewaySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewaySettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_host", &self.api_host)
            .field("store_url", &self.store_url)
            .field("store_service_key", &self.store_service_key.as_ref().map(|_| "<set>"))
            .field("store_table", &self.store_table)
            .finish()
    }
}

impl GatewaySettings {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let (api_key, api_host) = match &cfg.api.provider {
            ApiProvider::RapidApi(api) => (api.api_key.clone(), api.host.clone()),
            ApiProvider::Fixture(_) => (Some("fixture".to_string()), "fixture.local".to_string()),
        };
        let (store_url, store_service_key, store_table) = match &cfg.store.provider {
            StoreProvider::Supabase(s) => (s.url.clone(), s.service_key.clone(), s.table.clone()),
            StoreProvider::Memory => (
                Some("memory://".to_string()),
                Some("memory".to_string()),
                "influencers_raw".to_string(),
            ),
        };
        Self {
            api_key,
            api_host,
            store_url,
            store_service_key,
            store_table,
        }
    }

    pub fn api_credentials(&self) -> Result<ApiCredentials, ConfigError> {
        match present(&self.api_key) {
            Some(key) => Ok(ApiCredentials {
                api_key: key.to_string(),
                host: self.api_host.clone(),
            }),
            None => Err(ConfigError::Missing(vec![API_KEY_VAR])),
        }
    }

    /// Everything ingest needs, reporting all missing settings at once.
    pub fn ingest_targets(&self) -> Result<(ApiCredentials, StoreTarget), ConfigError> {
        let missing: Vec<&'static str> = [
            (API_KEY_VAR, present(&self.api_key)),
            (STORE_URL_VAR, present(&self.store_url)),
            (STORE_KEY_VAR, present(&self.store_service_key)),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| name)
        .collect();

        match (
            present(&self.api_key),
            present(&self.store_url),
            present(&self.store_service_key),
        ) {
            (Some(key), Some(url), Some(service_key)) => Ok((
                ApiCredentials {
                    api_key: key.to_string(),
                    host: self.api_host.clone(),
                },
                StoreTarget {
                    url: url.to_string(),
                    service_key: service_key.to_string(),
                    table: self.store_table.clone(),
                },
            )),
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

use std::sync::Arc;

use anyhow::Result;

use scout_core::config::{ApiProvider, AppConfig, StoreProvider};
use scout_core::gateway::{RawStore, StatsApi};

use crate::fixture::FixtureStatsApi;
use crate::stats_api::RapidApiClient;
use crate::store::{MemoryStore, SupabaseStore};

pub fn build_stats_api(cfg: &AppConfig) -> Result<Arc<dyn StatsApi>> {
    match &cfg.api.provider {
        ApiProvider::RapidApi(api_cfg) => Ok(Arc::new(RapidApiClient::new(
            api_cfg.base_url.clone(),
            cfg.api.timeout_ms,
        )?)),
        ApiProvider::Fixture(fx_cfg) => Ok(Arc::new(FixtureStatsApi::new(fx_cfg.profiles))),
    }
}

pub fn build_store(cfg: &AppConfig) -> Result<Arc<dyn RawStore>> {
    match &cfg.store.provider {
        StoreProvider::Supabase(_) => Ok(Arc::new(SupabaseStore::new(cfg.store.timeout_ms)?)),
        StoreProvider::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

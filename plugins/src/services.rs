//! GatewayFactory 实现：从配置构建 stats api / raw store，并组装 ingest 与 query 两个网关，供 CLI 复用。
use std::sync::Arc;

use scout_core::api::{AppConfig, GatewayFactory, GatewaySettings, Gateways, IngestGateway, QueryGateway};

use crate::factory;

#[derive(Default)]
pub struct PluginGatewayFactory;

impl GatewayFactory for PluginGatewayFactory {
    fn build_gateways(&self, cfg: &AppConfig) -> anyhow::Result<Gateways> {
        let settings = GatewaySettings::from_config(cfg);
        let api = factory::build_stats_api(cfg)?;
        let store = factory::build_store(cfg)?;
        tracing::debug!(api = api.name(), store = store.name(), ?settings, "gateways built");

        Ok(Gateways {
            ingest: Arc::new(IngestGateway::new(settings.clone(), api.clone(), store)),
            query: Arc::new(QueryGateway::new(settings, api)),
        })
    }
}

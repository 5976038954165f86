//! The two gateway functions in front of the statistics API.
//!
//! Both are single-pass: one outbound call, no retry, no backoff. Each
//! gateway owns its [`GatewaySettings`]; transports never see configuration
//! and receive credentials per call.

pub mod ingest;
pub mod query;
pub mod settings;
pub mod transport;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::GatewayError;
use crate::filter::FilterState;
use crate::search::SearchResult;

pub use ingest::{IngestGateway, IngestReport};
pub use query::QueryGateway;
pub use settings::GatewaySettings;
pub use transport::{ApiCredentials, RawRow, RawStore, StatsApi, StoreTarget};

/// Anything the pager can fetch a page from.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, filter: &FilterState) -> Result<SearchResult, GatewayError>;
}

#[async_trait]
impl<T: SearchGateway + ?Sized> SearchGateway for Arc<T> {
    async fn search(&self, filter: &FilterState) -> Result<SearchResult, GatewayError> {
        (**self).search(filter).await
    }
}

/// Both gateways, built once from configuration and shared by handlers.
#[derive(Clone)]
pub struct Gateways {
    pub ingest: Arc<IngestGateway>,
    pub query: Arc<QueryGateway>,
}

/// Implemented by the plugins crate to wire transports from configuration.
pub trait GatewayFactory: Send + Sync {
    fn build_gateways(&self, cfg: &AppConfig) -> anyhow::Result<Gateways>;
}

//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `scout_core::api` instead of reaching into internal modules.

pub use crate::config::{
    ApiProvider, AppConfig, FixtureConfig, HttpServerConfig, LoggingConfig, RapidApiConfig,
    StoreProvider, SupabaseConfig,
};
pub use crate::errors::{
    CliError, ConfigError, FilterError, GatewayError, GatewayStage, PagerError, StoreError,
    UpstreamError,
};
pub use crate::filter::{FilterState, QualityRange, SortKey, ToggleSet};
pub use crate::gateway::{
    ApiCredentials, GatewayFactory, GatewaySettings, Gateways, IngestGateway, IngestReport,
    QueryGateway, RawRow, RawStore, SearchGateway, StatsApi, StoreTarget,
};
pub use crate::pager::{Completion, Pager, PagerStatus};
pub use crate::query::{build_query, build_validated, ingest_filter, QueryParams};
pub use crate::search::{total_pages, InfluencerRecord, SearchResult};

pub mod cli_error;
pub mod config_error;
pub mod filter_error;
pub mod gateway_error;
pub mod pager_error;
pub mod store_error;
pub mod upstream_error;

pub use cli_error::CliError;
pub use config_error::ConfigError;
pub use filter_error::FilterError;
pub use gateway_error::{GatewayError, GatewayStage};
pub use pager_error::PagerError;
pub use store_error::StoreError;
pub use upstream_error::UpstreamError;

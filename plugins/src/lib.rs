pub mod factory;
pub mod fixture;
pub mod services;
pub mod stats_api;
pub mod store;

pub use services::PluginGatewayFactory;

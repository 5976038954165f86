//! HTTP网关：把 ingest / query 两个网关暴露为 HTTP 接口

pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::HttpServerError;
pub use state::AppState;

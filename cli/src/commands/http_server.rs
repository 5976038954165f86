//! HTTP服务器命令处理器

use std::time::Duration;

use scout_core::api::{AppConfig, CliError, GatewayFactory};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::commands::cli::HttpServerArgs;
use crate::http::{server, AppState};

/// 处理 serve 命令
pub async fn handle_http_server(
    args: HttpServerArgs,
    cfg: &AppConfig,
    factory: &dyn GatewayFactory,
) -> Result<(), CliError> {
    let session_id = args
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // CLI 参数优先，配置文件作为默认值
    let config = server::ServerConfig {
        host: args.host.unwrap_or_else(|| cfg.http_server.host.clone()),
        port: args.port.unwrap_or(cfg.http_server.port),
        request_timeout: Duration::from_secs(cfg.http_server.request_timeout_secs),
    };

    let gateways = factory.build_gateways(cfg).map_err(CliError::Plugin)?;

    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState::new(session_id, gateways, shutdown_tx);

    server::start_server(config, state)
        .await
        .map_err(|e| CliError::Command(e.to_string()))?;

    Ok(())
}

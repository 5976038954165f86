use clap::Parser;
mod commands;
mod grid;
mod http;
use commands::{cli, http_server, ingest, search};
use scout_core::api::{AppConfig, CliError, LoggingConfig};
use scout_core::config;
use scout_plugins::PluginGatewayFactory;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = cli::Args::parse();

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_from_path(path)?,
        None => config::load_default()?,
    };
    init_tracing(&cfg.logging);

    dispatch(args.command, &cfg).await
}

/// `RUST_LOG` wins over `[logging].level`. Logs go to stderr so `search --json` stays pipeable.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn dispatch(cmd: cli::Commands, cfg: &AppConfig) -> Result<(), CliError> {
    let factory = PluginGatewayFactory;
    match cmd {
        cli::Commands::Serve(serve_args) => {
            http_server::handle_http_server(serve_args, cfg, &factory).await?;
        }
        cli::Commands::Ingest => {
            ingest::handle_ingest(cfg, &factory).await?;
        }
        cli::Commands::Search(search_args) => {
            search::handle_search(search_args, cfg, &factory).await?;
        }
        cli::Commands::Params(filter_args) => {
            search::handle_params(filter_args)?;
        }
    }
    Ok(())
}

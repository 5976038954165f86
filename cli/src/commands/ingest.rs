use scout_core::api::{AppConfig, CliError, GatewayFactory};

pub async fn handle_ingest(cfg: &AppConfig, factory: &dyn GatewayFactory) -> Result<(), CliError> {
    let gateways = factory.build_gateways(cfg).map_err(CliError::Plugin)?;
    let report = gateways.ingest.run().await?;

    let line = serde_json::to_string(&report).map_err(|e| CliError::Command(e.to_string()))?;
    println!("{line}");
    Ok(())
}

use serde::Serialize;

use scout_core::api::{
    build_validated, AppConfig, CliError, Completion, GatewayFactory, InfluencerRecord, Pager,
};

use crate::commands::cli::{FilterArgs, SearchArgs};
use crate::grid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a> {
    page: u32,
    total_pages: u32,
    total_count: u64,
    records: &'a [InfluencerRecord],
}

/// Submits the filter, then moves to the requested page when it is not the first.
pub async fn handle_search(
    args: SearchArgs,
    cfg: &AppConfig,
    factory: &dyn GatewayFactory,
) -> Result<(), CliError> {
    let filter = args.filter.to_filter()?;
    let wanted = filter.page.max(1);
    let gateways = factory.build_gateways(cfg).map_err(CliError::Plugin)?;
    let gateway = gateways.query.as_ref();

    let mut pager = Pager::new(filter.per_page);
    fail_on_error(pager.submit(gateway, filter).await?)?;
    if wanted > 1 {
        fail_on_error(pager.go_to(gateway, wanted).await?)?;
    }

    if args.json {
        let out = PageOutput {
            page: pager.current_page(),
            total_pages: pager.total_pages(),
            total_count: pager.total_count(),
            records: pager.records(),
        };
        let text =
            serde_json::to_string_pretty(&out).map_err(|e| CliError::Command(e.to_string()))?;
        println!("{text}");
    } else {
        print!("{}", grid::render_pager(&pager));
    }
    Ok(())
}

fn fail_on_error(completion: Completion) -> Result<(), CliError> {
    match completion {
        Completion::Failed { message } => Err(CliError::Command(message)),
        Completion::Applied | Completion::Stale => Ok(()),
    }
}

pub fn handle_params(args: FilterArgs) -> Result<(), CliError> {
    let filter = args.to_filter()?;
    let params =
        build_validated(&filter).map_err(|e| CliError::Command(format!("invalid filter: {e}")))?;
    for (key, value) in params.iter() {
        println!("{key}={value}");
    }
    Ok(())
}

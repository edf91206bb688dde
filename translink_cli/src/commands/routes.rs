use anyhow::Result;
use clap::Args;
use translink_api::{Client, RoutesQuery};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct RoutesArgs {
    /// Route number, e.g. 099
    #[arg(long, default_value = "")]
    pub route: String,

    /// Only routes serving this five-digit stop
    #[arg(long)]
    pub stop: Option<u32>,
}

pub async fn run(args: &RoutesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = RoutesQuery { stop_no: args.stop };
    let resp = client.get_routes(&args.route, &query).await?;
    print_value(&resp, format);
    Ok(())
}

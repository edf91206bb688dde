use anyhow::Result;
use clap::Args;
use translink_api::{BusesQuery, Client};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct BusesArgs {
    /// Vehicle number of a single bus
    #[arg(long)]
    pub bus: Option<u32>,

    /// Only buses serving this five-digit stop
    #[arg(long)]
    pub stop: Option<u32>,

    /// Only buses on this route
    #[arg(long)]
    pub route: Option<String>,
}

pub async fn run(args: &BusesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = BusesQuery {
        stop_no: args.stop,
        route_no: args.route.clone(),
    };
    let resp = client.get_buses(args.bus, &query).await?;
    print_value(&resp, format);
    Ok(())
}

use anyhow::Result;
use clap::Args;
use translink_api::{Client, StopsQuery};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct StopsArgs {
    /// Five-digit stop number
    #[arg(long)]
    pub stop: Option<u32>,

    /// Latitude of the search point
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the search point
    #[arg(long, allow_hyphen_values = true)]
    pub long: Option<f64>,

    /// Search radius in metres (1-2000, requires --lat and --long)
    #[arg(long)]
    pub radius: Option<i64>,

    /// Only stops served by this route (requires --lat and --long)
    #[arg(long)]
    pub route: Option<String>,
}

pub async fn run(args: &StopsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = StopsQuery {
        lat: args.lat,
        long: args.long,
        radius: args.radius,
        route_no: args.route.clone(),
    };
    let resp = client.get_stops(args.stop, &query).await?;
    print_value(&resp, format);
    Ok(())
}

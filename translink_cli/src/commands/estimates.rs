use anyhow::Result;
use clap::Args;
use translink_api::{Client, EstimatesQuery};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct EstimatesArgs {
    /// Five-digit stop number
    #[arg(long)]
    pub stop: u32,

    /// Buses per route (1-10, API default 6)
    #[arg(long)]
    pub count: Option<i64>,

    /// Time frame in minutes (1-120, API default 120)
    #[arg(long)]
    pub timeframe: Option<i64>,

    /// Only estimates for this route
    #[arg(long)]
    pub route: Option<String>,
}

pub async fn run(args: &EstimatesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = EstimatesQuery::default();
    if let Some(count) = args.count {
        query = query.with_count(count);
    }
    if let Some(timeframe) = args.timeframe {
        query = query.with_time_frame(timeframe);
    }
    if let Some(route) = &args.route {
        query = query.with_route_no(route);
    }

    let resp = client.get_stop_estimates(args.stop, &query).await?;
    print_value(&resp, format);
    Ok(())
}

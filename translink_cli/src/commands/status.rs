use anyhow::Result;
use clap::Args;
use translink_api::Client;

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct StatusArgs {
    /// Service to check: location, schedule or all
    #[arg(default_value = "all")]
    pub service: String,
}

pub async fn run(args: &StatusArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_status(&args.service).await?;
    print_value(&resp, format);
    Ok(())
}

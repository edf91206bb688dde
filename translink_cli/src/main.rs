mod commands;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use translink_api::{Client, DEFAULT_BASE_URL};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "translink")]
#[command(about = "Query real-time transit information from the TransLink RTTI API")]
struct Cli {
    /// RTTI API key (falls back to TRANSLINK_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Output format: json or table
    #[arg(long, default_value = "json", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a stop or search stops around a point
    Stops(commands::stops::StopsArgs),
    /// Next bus estimates for a stop
    Estimates(commands::estimates::EstimatesArgs),
    /// Real-time bus locations
    Buses(commands::buses::BusesArgs),
    /// Route information
    Routes(commands::routes::RoutesArgs),
    /// Status of the location and schedule services
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translink=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        _ => OutputFormat::Json,
    };

    let api_key = match cli.api_key.or_else(|| std::env::var("TRANSLINK_API_KEY").ok()) {
        Some(key) => key,
        None => bail!("No API key: pass --api-key or set TRANSLINK_API_KEY"),
    };
    let base_url =
        std::env::var("TRANSLINK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = Client::with_base_url(&base_url, &api_key)?;

    match &cli.command {
        Commands::Stops(args) => commands::stops::run(args, &client, &format).await?,
        Commands::Estimates(args) => commands::estimates::run(args, &client, &format).await?,
        Commands::Buses(args) => commands::buses::run(args, &client, &format).await?,
        Commands::Routes(args) => commands::routes::run(args, &client, &format).await?,
        Commands::Status(args) => commands::status::run(args, &client, &format).await?,
    }

    Ok(())
}

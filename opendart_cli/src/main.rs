mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "opendart")]
#[command(about = "Query Korean corporate disclosure data from OpenDART")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the corp index and rebuild the local registry
    Sync(commands::sync::SyncArgs),
    /// Resolve a company name against the local registry
    Find(commands::find::FindArgs),
    /// List disclosures filed by a company
    Disclosures(commands::disclosures::DisclosuresArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("opendart_lib=info".parse().unwrap())
                .add_directive("opendart_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Sync(args) => commands::sync::run(args).await?,
        Commands::Find(args) => commands::find::run(args, &format)?,
        Commands::Disclosures(args) => commands::disclosures::run(args, &format).await?,
    }

    Ok(())
}

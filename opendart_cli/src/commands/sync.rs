//! The `sync` subcommand: rebuild the local corp registry from OpenDART.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use opendart_lib::{sync_corp_index, Db};

/// Arguments for the `sync` subcommand.
#[derive(Args)]
pub struct SyncArgs {
    /// SQLite database path
    #[arg(long, default_value = "opendart.db")]
    pub db: PathBuf,
}

pub async fn run(args: &SyncArgs) -> Result<()> {
    let client = super::build_client()?;
    let mut db = Db::open(&args.db)?;
    db.init()?;

    eprintln!("Starting corp index sync into {}", args.db.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("downloading corp index...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let report = sync_corp_index(&client, &mut db).await;
    spinner.finish_and_clear();
    let report = report?;

    eprintln!(
        "Sync complete: {} corps as of {}",
        report.corp_count,
        report.synced_at.to_rfc3339()
    );
    Ok(())
}

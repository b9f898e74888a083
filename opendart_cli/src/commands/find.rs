//! The `find` subcommand: resolve a company name to registry entries.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use clap::Args;
use opendart_lib::{Db, Resolver};

use crate::output::{self, OutputFormat};

/// Arguments for the `find` subcommand.
#[derive(Args)]
pub struct FindArgs {
    /// Company name (or fragment) to resolve
    pub query: String,

    /// Maximum number of matches to return
    #[arg(short = 'k', long, default_value = "10")]
    pub top: usize,

    /// SQLite database path
    #[arg(long, default_value = "opendart.db")]
    pub db: PathBuf,
}

pub fn run(args: &FindArgs, format: &OutputFormat) -> Result<()> {
    if !args.db.exists() {
        bail!(
            "registry database {} not found; run `opendart sync` first",
            args.db.display()
        );
    }
    let db = Db::open(&args.db)?;
    db.init()?;

    let resolver = Resolver::new(Arc::new(Mutex::new(db)));
    let corps = resolver.resolve(&args.query, args.top)?;

    if corps.is_empty() {
        eprintln!("No companies matched {:?}", args.query);
        return Ok(());
    }
    output::print_corps(&corps, format)
}

//! The `disclosures` subcommand: list filings for a corp code.

use anyhow::Result;
use clap::Args;
use opendart_lib::{validation, DisclosureQuery};

use crate::output::{self, OutputFormat};

/// Arguments for the `disclosures` subcommand.
#[derive(Args)]
pub struct DisclosuresArgs {
    /// 8-digit corp code (resolve names with `opendart find`)
    pub corp_code: String,

    /// Search window start (YYYYMMDD)
    #[arg(long)]
    pub from: String,

    /// Search window end (YYYYMMDD)
    #[arg(long)]
    pub to: String,

    /// Results per page (1-100)
    #[arg(long, default_value = "100")]
    pub page_count: i64,
}

pub async fn run(args: &DisclosuresArgs, format: &OutputFormat) -> Result<()> {
    let begin = validation::validate_date(&args.from)?;
    let end = validation::validate_date(&args.to)?;

    let client = super::build_client()?;
    let query = DisclosureQuery::default()
        .with_corp_code(&args.corp_code)
        .with_date_range(begin, end)
        .with_page_count(args.page_count);

    let disclosures = client.get_disclosures(&query).await?;

    if disclosures.is_empty() {
        eprintln!(
            "No disclosures for {} between {} and {}",
            args.corp_code, args.from, args.to
        );
        return Ok(());
    }
    output::print_disclosures(&disclosures, format)
}

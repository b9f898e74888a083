//! CLI subcommand implementations.

pub mod disclosures;
pub mod find;
pub mod sync;

use anyhow::{anyhow, Result};
use opendart_lib::Client;

/// Builds an API client from the environment: `DART_API_KEY` is required
/// for network commands, `OPENDART_BASE_URL` overrides the endpoint
/// (tests, proxies).
pub fn build_client() -> Result<Client> {
    let api_key = std::env::var("DART_API_KEY")
        .map_err(|_| anyhow!("DART_API_KEY is not set; get a key at https://opendart.fss.or.kr"))?;

    let client = match std::env::var("OPENDART_BASE_URL") {
        Ok(url) => Client::with_base_url(&url, api_key)?,
        Err(_) => Client::new(api_key)?,
    };
    Ok(client)
}

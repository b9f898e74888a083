//! HTTP client for the OpenDART open API.

use std::time::Duration;

use url::Url;

use crate::feed;
use crate::query::DisclosureQuery;
use crate::types::{CorpRecord, Disclosure, DisclosureList, STATUS_NO_DATA, STATUS_OK};
use crate::Error;

const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// The corp index is a multi-megabyte archive download.
const FEED_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP client for the OpenDART open API.
///
/// Every request carries the caller's `crtfc_key`. JSON endpoints get a
/// 30-second timeout; the bulk corp index download gets 120 seconds.
pub struct Client {
    /// Base URL for the API. Defaults to `https://opendart.fss.or.kr/api`.
    base_api_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production OpenDART API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        url.query_pairs_mut()
            .append_pair("crtfc_key", &self.api_key);
        Ok(url)
    }

    async fn get_bytes(&self, url: Url, timeout: Duration) -> Result<Vec<u8>, Error> {
        let resp = self
            .http
            .get(url)
            .timeout(timeout)
            .header("accept", "*/*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body.to_vec())
    }

    /// Downloads and decodes the full corp index (`corpCode.xml`).
    ///
    /// This is the bulk snapshot feed: every registrant OpenDART knows
    /// about, in source order. There is no incremental variant.
    pub async fn fetch_corp_index(&self) -> Result<Vec<CorpRecord>, Error> {
        let url = self.get_url("/corpCode.xml")?;
        let body = self.get_bytes(url, FEED_TIMEOUT).await?;
        feed::parse_corp_index(&body)
    }

    /// Fetches the disclosure list (`list.json`) matching the given query.
    ///
    /// OpenDART reports "no matching disclosures" as status 013; that is
    /// an empty list here, not an error. Any other non-success status is
    /// surfaced as [`Error::Api`].
    pub async fn get_disclosures(
        &self,
        query: &DisclosureQuery,
    ) -> Result<Vec<Disclosure>, Error> {
        let url = query.add_to_url(&self.get_url("/list.json")?);
        let body = self.get_bytes(url, REQUEST_TIMEOUT).await?;
        let text = String::from_utf8_lossy(&body);

        let parsed = serde_json::from_str::<DisclosureList>(&text).map_err(|e| {
            let snippet = truncate_body(&text);
            tracing::error!("Failed to parse disclosure list: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        match parsed.status.as_str() {
            STATUS_OK => Ok(parsed.list),
            STATUS_NO_DATA => Ok(Vec::new()),
            _ => Err(Error::Api {
                code: parsed.status,
                message: parsed.message,
            }),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

//! Wire types for OpenDART responses.

use serde::{Deserialize, Serialize};

/// OpenDART application status for a successful response.
pub const STATUS_OK: &str = "000";
/// OpenDART application status meaning "no data found" — a normal empty result.
pub const STATUS_NO_DATA: &str = "013";

/// One raw entry from the `CORPCODE.xml` bulk feed.
///
/// Field names and shapes mirror the feed verbatim: optional fields
/// arrive as blank or whitespace-padded strings, never as missing
/// elements. Normalization happens downstream, at ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpRecord {
    pub corp_code: String,
    pub corp_name: String,
    #[serde(default)]
    pub corp_eng_name: String,
    #[serde(default)]
    pub stock_code: String,
    #[serde(default)]
    pub modify_date: String,
}

/// Root of the decoded `CORPCODE.xml` document.
#[derive(Debug, Deserialize)]
pub(crate) struct CorpIndex {
    #[serde(rename = "list", default)]
    pub entries: Vec<CorpRecord>,
}

/// Bare status envelope OpenDART serves in place of a payload when a
/// request is rejected outright (e.g. an invalid `crtfc_key` on the
/// feed endpoint, which answers with XML instead of an archive).
#[derive(Debug, Deserialize)]
pub struct StatusEnvelope {
    pub status: String,
    pub message: String,
}

/// One disclosure filing from the `list.json` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disclosure {
    pub corp_code: String,
    pub corp_name: String,
    #[serde(default)]
    pub stock_code: String,
    /// Market classification: Y (KOSPI), K (KOSDAQ), N (KONEX), E (other).
    #[serde(default)]
    pub corp_cls: String,
    /// Report title, e.g. "사업보고서 (2023.12)".
    pub report_nm: String,
    /// Receipt number; key for the disclosure viewer.
    pub rcept_no: String,
    /// Filer name.
    #[serde(default)]
    pub flr_nm: String,
    /// Receipt date (YYYYMMDD).
    pub rcept_dt: String,
    /// Remark flags.
    #[serde(default)]
    pub rm: String,
}

/// Envelope of the `list.json` endpoint.
#[derive(Debug, Deserialize)]
pub struct DisclosureList {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub page_no: Option<i64>,
    #[serde(default)]
    pub page_count: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub list: Vec<Disclosure>,
}

//! Corpus synchronization: bring the corp registry in line with OpenDART.

use chrono::{DateTime, Utc};

use opendart_api::types::CorpRecord;
use opendart_api::Client;

use crate::db::{Corp, Db};
use crate::error::RegistryError;

const META_LAST_SYNC: &str = "last_corp_sync";
const META_CORP_COUNT: &str = "corp_count";

/// Outcome of a successful corpus synchronization.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub corp_count: usize,
    pub synced_at: DateTime<Utc>,
}

/// Replaces the registry contents with the current OpenDART corpus.
///
/// Fetch, map, and replace form one episode: a fetch or storage failure
/// leaves the previous contents untouched, and a post-replace count
/// mismatch is a fatal consistency error — a store that disagrees with
/// the source must not serve resolution traffic. There is no retry; the
/// caller decides whether a failed sync is fatal (at startup it is).
pub async fn sync_corp_index(client: &Client, db: &mut Db) -> Result<SyncReport, RegistryError> {
    let records = client.fetch_corp_index().await?;
    tracing::info!("Fetched corp index: {} records", records.len());

    let corps: Vec<Corp> = records.into_iter().map(map_record).collect();
    db.replace_corps(&corps)?;

    let stored = db.corp_count()?;
    if stored != corps.len() as i64 {
        tracing::error!(
            "corp count mismatch after sync: store {} vs corpus {}",
            stored,
            corps.len()
        );
        return Err(RegistryError::CorpusMismatch {
            expected: corps.len(),
            actual: stored,
        });
    }

    let synced_at = Utc::now();
    db.set_meta(META_LAST_SYNC, &synced_at.to_rfc3339())?;
    db.set_meta(META_CORP_COUNT, &stored.to_string())?;
    tracing::info!("Corp registry synchronized: {} corps", stored);

    Ok(SyncReport {
        corp_count: corps.len(),
        synced_at,
    })
}

/// Maps a raw feed record onto the storage schema.
///
/// Renaming and blank-field normalization only: no filtering, no
/// deduplication. The feed pads optional fields with whitespace instead
/// of omitting them.
fn map_record(record: CorpRecord) -> Corp {
    Corp {
        corp_code: record.corp_code,
        corp_name: record.corp_name,
        corp_eng_name: normalize_optional(record.corp_eng_name),
        stock_code: normalize_optional(record.stock_code),
        modify_date: record.modify_date,
    }
}

fn normalize_optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

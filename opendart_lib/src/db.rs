//! SQLite storage for the corp registry.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One corporate registrant as stored in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corp {
    /// 8-digit registry code issued by OpenDART; primary key.
    pub corp_code: String,
    /// Official Korean name. Not unique; duplicates legitimately exist.
    pub corp_name: String,
    pub corp_eng_name: Option<String>,
    /// 6-digit ticker; `None` when the corp is unlisted.
    pub stock_code: Option<String>,
    /// Source-reported last-update stamp (YYYYMMDD).
    pub modify_date: String,
}

const CORPS_DDL: &str = "CREATE TABLE IF NOT EXISTS corps (
    corp_code TEXT PRIMARY KEY,
    corp_name TEXT NOT NULL,
    corp_eng_name TEXT,
    stock_code TEXT,
    modify_date TEXT NOT NULL
)";

const SELECT_CORP_COLUMNS: &str =
    "SELECT corp_code, corp_name, corp_eng_name, stock_code, modify_date FROM corps";

pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS ingest_meta (key TEXT PRIMARY KEY, value TEXT NOT NULL);
             {};",
            CORPS_DDL
        ))?;
        Ok(())
    }

    /// Replaces the entire corps table with the given set in one transaction.
    ///
    /// Drop-and-recreate rather than merge: corps that vanished from the
    /// source vanish here too. Any failure during the drop or the bulk
    /// insert (including a duplicate `corp_code`) rolls the whole
    /// transaction back, leaving the previous contents intact.
    pub fn replace_corps(&mut self, corps: &[Corp]) -> Result<usize, DbError> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(&format!("DROP TABLE IF EXISTS corps; {};", CORPS_DDL))?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO corps (corp_code, corp_name, corp_eng_name, stock_code, modify_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for corp in corps {
                stmt.execute(params![
                    corp.corp_code,
                    corp.corp_name,
                    corp.corp_eng_name,
                    corp.stock_code,
                    corp.modify_date,
                ])?;
            }
        }
        tx.commit()?;
        Ok(corps.len())
    }

    /// Returns every corp whose name contains `needle`, in storage order.
    ///
    /// The needle is matched as a literal substring: LIKE wildcards in
    /// the input are escaped before the query runs.
    pub fn find_corps_by_name_substring(&self, needle: &str) -> Result<Vec<Corp>, DbError> {
        let pattern = format!("%{}%", escape_like(needle));
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE corp_name LIKE ?1 ESCAPE '\\' ORDER BY rowid",
            SELECT_CORP_COLUMNS
        ))?;
        let rows = stmt.query_map(params![pattern], corp_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    }

    pub fn corp_count(&self) -> Result<i64, DbError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM corps", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn get_meta(&self, key: &str) -> Result<Option<String>, DbError> {
        self.conn
            .query_row(
                "SELECT value FROM ingest_meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(DbError::from)
    }

    pub fn set_meta(&self, key: &str, value: &str) -> Result<(), DbError> {
        self.conn.execute(
            "INSERT INTO ingest_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

fn corp_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Corp> {
    Ok(Corp {
        corp_code: row.get(0)?,
        corp_name: row.get(1)?,
        corp_eng_name: row.get(2)?,
        stock_code: row.get(3)?,
        modify_date: row.get(4)?,
    })
}

/// Escape LIKE wildcards so the needle matches as a literal substring.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

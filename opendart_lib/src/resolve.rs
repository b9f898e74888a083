//! Company-name resolution: substring retrieval plus similarity ranking.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cache::MemoryCache;
use crate::db::{Corp, Db};
use crate::error::RegistryError;
use crate::ranking;
use crate::validation;

/// How long resolved results stay cached. The registry only changes on
/// resync, so the TTL is a memory bound, not a freshness contract;
/// `clear_cache` handles resync invalidation.
const RESULT_TTL: Duration = Duration::from_secs(300);

/// Entry point for company-name resolution.
///
/// Validates the query, pulls substring candidates from the store, ranks
/// them by name similarity, and returns at most `k` corps best-match
/// first. An empty result is a normal outcome; a storage failure is an
/// error and is never reported as "no match".
pub struct Resolver {
    db: Arc<Mutex<Db>>,
    cache: MemoryCache<Vec<Corp>>,
}

impl Resolver {
    pub fn new(db: Arc<Mutex<Db>>) -> Self {
        Self {
            db,
            cache: MemoryCache::new(RESULT_TTL),
        }
    }

    pub fn resolve(&self, query: &str, k: usize) -> Result<Vec<Corp>, RegistryError> {
        let query = validation::validate_query(query)?;
        let k = validation::validate_top_k(k)?;

        let cache_key = format!("resolve:{}:{}", query, k);
        if let Some(cached) = self.cache.get(&cache_key) {
            return Ok(cached);
        }

        let candidates = {
            let db = self.db.lock().expect("db mutex poisoned");
            db.find_corps_by_name_substring(&query)?
        };
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let ranked = ranking::rank_top_k(&query, candidates, k);
        self.cache.set(cache_key, ranked.clone());
        Ok(ranked)
    }

    /// Drops all cached results. Call after a resync.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

// src/scrape/cache.rs
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info, warn};

use crate::errors::ScrapeError;
use crate::table::DataTable;

const SECS_PER_DAY: u64 = 86_400;

/// File-backed table cache: one CSV per key, invalidated lazily by age.
/// Stale files are never deleted, only overwritten by the next store.
#[derive(Debug, Clone)]
pub struct TableCache {
    dir: PathBuf,
    enabled: bool,
    ttl_days: u64,
}

impl TableCache {
    pub fn new(dir: impl Into<PathBuf>, enabled: bool, ttl_days: u64) -> Self {
        Self {
            dir: dir.into(),
            enabled,
            ttl_days,
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.csv"))
    }

    /// Cache lookup. Disabled caching, a missing file, and a stale file are
    /// all misses; a malformed cache file is an error, so corruption never
    /// looks like a miss.
    pub fn load(&self, key: &str) -> Result<Option<DataTable>, ScrapeError> {
        if !self.enabled {
            return Ok(None);
        }
        let path = self.path_for(key);
        if !path.exists() {
            debug!(key, "cache miss");
            return Ok(None);
        }

        match file_age_days(&path) {
            Some(age) if !is_fresh(age, self.ttl_days) => {
                info!(key, age_days = age, ttl_days = self.ttl_days, "cache stale");
                Ok(None)
            }
            None => {
                warn!(key, "cache mtime unreadable, treating as miss");
                Ok(None)
            }
            Some(age) => {
                let table = DataTable::read_csv(&path)?;
                info!(key, age_days = age, rows = table.len(), "cache hit");
                Ok(Some(table))
            }
        }
    }

    /// Overwrite the entry for `key` unconditionally. No-op when disabled.
    pub fn store(&self, table: &DataTable, key: &str) -> Result<(), ScrapeError> {
        if !self.enabled {
            return Ok(());
        }
        let path = self.path_for(key);
        table.write_csv(&path)?;
        info!(key, rows = table.len(), "cached");
        Ok(())
    }
}

/// Age exactly at the TTL still counts as fresh.
pub(crate) fn is_fresh(age_days: u64, ttl_days: u64) -> bool {
    age_days <= ttl_days
}

// A future mtime reads as age zero, never as an error.
fn file_age_days(path: &Path) -> Option<u64> {
    let modified = path.metadata().ok()?.modified().ok()?;
    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or_default();
    Some(age.as_secs() / SECS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_boundary_sits_at_the_ttl() {
        assert!(is_fresh(0, 7));
        assert!(is_fresh(7, 7));
        assert!(!is_fresh(8, 7));
    }

    #[test]
    fn zero_ttl_keeps_same_day_entries() {
        assert!(is_fresh(0, 0));
        assert!(!is_fresh(1, 0));
    }
}

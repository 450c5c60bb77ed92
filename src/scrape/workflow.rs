// src/scrape/workflow.rs
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::errors::ScrapeError;
use crate::geo::GeoBounds;
use crate::scrape::cache::TableCache;
use crate::scrape::source::{ScrapeParams, ScrapeSource};
use crate::table::DataTable;
use crate::util::helpers::hashed_key;

/// Column the dedup step keys on; every validated table must carry it.
pub const ADDRESS_COLUMN: &str = "address";
pub const LATITUDE_COLUMN: &str = "lat";
pub const LONGITUDE_COLUMN: &str = "lon";

const KEY_HASH_LEN: usize = 12;
const DEFAULT_CACHE_DIR: &str = "data/raw";
const DEFAULT_TTL_DAYS: u64 = 7;

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub cache_dir: PathBuf,
    pub cache_enabled: bool,
    pub cache_ttl_days: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            cache_enabled: true,
            cache_ttl_days: DEFAULT_TTL_DAYS,
        }
    }
}

/// Owns the steps every source shares: cache lookup, fetch/parse
/// orchestration, validation, geography filtering. Sources plug in through
/// [`ScrapeSource`] and supply nothing else.
pub struct ScrapeWorkflow {
    cache: TableCache,
}

impl ScrapeWorkflow {
    /// Build the workflow and create its cache directory.
    pub fn new(config: WorkflowConfig) -> Result<Self, ScrapeError> {
        fs::create_dir_all(&config.cache_dir)?;
        info!(cache_dir = %config.cache_dir.display(), "scrape workflow ready");
        Ok(Self {
            cache: TableCache::new(
                config.cache_dir,
                config.cache_enabled,
                config.cache_ttl_days,
            ),
        })
    }

    /// Cache key for one source and parameter set:
    /// `{source lower-cased}_{YYYYMM}_{12 hex chars}`. The month stamp
    /// retires keys naturally; the digest half hashes the sorted
    /// parameters, so insertion order never splits the cache.
    pub fn cache_key(&self, source_name: &str, params: &ScrapeParams) -> String {
        let month = Local::now().format("%Y%m");
        let digest = hashed_key(&[], params.as_map());
        format!(
            "{}_{month}_{}",
            source_name.to_lowercase(),
            &digest[..KEY_HASH_LEN]
        )
    }

    /// Run one scrape: consult the cache (when `use_cache`), otherwise
    /// fetch, parse, store, return. Validation and geography filtering are
    /// separate calls; chain them as the data requires.
    pub fn scrape<S: ScrapeSource>(
        &self,
        source: &mut S,
        use_cache: bool,
        params: &ScrapeParams,
    ) -> Result<DataTable, ScrapeError> {
        let key = self.cache_key(source.name(), params);
        if use_cache {
            if let Some(table) = self.cache.load(&key)? {
                return Ok(table);
            }
        }

        info!(source = source.name(), %params, "fetching");
        let raw = source.fetch(params)?;
        let table = source.parse(raw)?;
        self.cache.store(&table, &key)?;
        Ok(table)
    }

    /// Cache lookup as a standalone step.
    pub fn load_cached(&self, key: &str) -> Result<Option<DataTable>, ScrapeError> {
        self.cache.load(key)
    }

    /// Cache write as a standalone step.
    pub fn save_cached(&self, table: &DataTable, key: &str) -> Result<(), ScrapeError> {
        self.cache.store(table, key)
    }

    /// Validate a scraped table: require the listed columns, drop duplicate
    /// addresses keeping the first occurrence, then drop rows with nulls in
    /// any required column. The address column is always required because
    /// it is the dedup key.
    pub fn validate(
        &self,
        mut table: DataTable,
        required_columns: &[&str],
    ) -> Result<DataTable, ScrapeError> {
        let mut required: Vec<&str> = vec![ADDRESS_COLUMN];
        required.extend(
            required_columns
                .iter()
                .copied()
                .filter(|c| *c != ADDRESS_COLUMN),
        );

        let missing: Vec<String> = required
            .iter()
            .filter(|c| !table.has_column(c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ScrapeError::MissingColumns(missing));
        }

        let before = table.len();
        let keep = dedup_flags(&table);
        table.retain_rows(|i| keep[i]);
        let duplicates = before - table.len();
        if duplicates > 0 {
            warn!(duplicates, "removed duplicate addresses");
        }

        let before = table.len();
        let keep = non_null_flags(&table, &required);
        table.retain_rows(|i| keep[i]);
        let dropped = before - table.len();
        if dropped > 0 {
            warn!(dropped, "removed rows with missing required values");
        }

        info!(
            rows = table.len(),
            columns = table.columns().len(),
            "validated"
        );
        Ok(table)
    }

    /// Keep only rows whose coordinates fall inside `bounds`. Tables
    /// without both coordinate columns pass through unchanged; rows with
    /// null or unparseable coordinates fall outside every box.
    pub fn filter_geography(&self, mut table: DataTable, bounds: &GeoBounds) -> DataTable {
        if !table.has_column(LATITUDE_COLUMN) || !table.has_column(LONGITUDE_COLUMN) {
            warn!("no coordinate columns, skipping geography filter");
            return table;
        }

        let before = table.len();
        let keep: Vec<bool> = (0..table.len())
            .map(|i| {
                match (
                    table.float(i, LATITUDE_COLUMN),
                    table.float(i, LONGITUDE_COLUMN),
                ) {
                    (Some(lat), Some(lon)) => bounds.contains(lat, lon),
                    _ => false,
                }
            })
            .collect();
        table.retain_rows(|i| keep[i]);

        let removed = before - table.len();
        if removed > 0 {
            info!(removed, rows = table.len(), "geography filtered");
        }
        table
    }
}

/// First occurrence of each address wins; null addresses count as one group.
fn dedup_flags(table: &DataTable) -> Vec<bool> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    (0..table.len())
        .map(|i| seen.insert(table.value(i, ADDRESS_COLUMN).map(str::to_string)))
        .collect()
}

fn non_null_flags(table: &DataTable, required: &[&str]) -> Vec<bool> {
    (0..table.len())
        .map(|i| required.iter().all(|c| table.value(i, c).is_some()))
        .collect()
}

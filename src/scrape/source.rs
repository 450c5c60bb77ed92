// src/scrape/source.rs
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ScrapeError;
use crate::table::DataTable;

/// Ordered parameter set for a scrape request. Iteration is always
/// key-sorted, so anything derived from it (cache keys above all) is
/// independent of the order parameters were added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeParams {
    values: BTreeMap<String, String>,
}

impl ScrapeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl fmt::Display for ScrapeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.values {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}

/// A source supplies the two site-specific steps of a run: fetching a raw
/// payload and parsing it into a table. Caching, validation, and geography
/// filtering live in the workflow; sources stay oblivious to them.
pub trait ScrapeSource {
    /// Payload handed from `fetch` to `parse`.
    type Raw;

    /// Stable per-source name; lower-cased it becomes the cache namespace.
    fn name(&self) -> &'static str;

    fn fetch(&mut self, params: &ScrapeParams) -> Result<Self::Raw, ScrapeError>;

    fn parse(&self, raw: Self::Raw) -> Result<DataTable, ScrapeError>;
}

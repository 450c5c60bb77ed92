// src/tests/cache_tests.rs
use std::fs;

use crate::errors::ScrapeError;
use crate::scrape::cache::TableCache;
use crate::table::DataTable;
use crate::tests::utils::{backdate, listing_table, temp_dir};

#[test]
fn load_misses_before_store_and_hits_after() {
    let cache = TableCache::new(temp_dir("cache_roundtrip"), true, 7);
    let table = listing_table();

    assert!(cache.load("k").unwrap().is_none());
    cache.store(&table, "k").unwrap();
    assert_eq!(cache.load("k").unwrap(), Some(table));
}

#[test]
fn disabled_cache_never_stores_or_loads() {
    let dir = temp_dir("cache_disabled");
    let cache = TableCache::new(dir.clone(), false, 7);

    cache.store(&listing_table(), "k").unwrap();

    assert!(!dir.join("k.csv").exists());
    assert!(cache.load("k").unwrap().is_none());
}

#[test]
fn stale_entry_is_a_miss() {
    let dir = temp_dir("cache_stale");
    let cache = TableCache::new(dir.clone(), true, 7);

    cache.store(&listing_table(), "k").unwrap();
    backdate(&dir.join("k.csv"), 8);

    assert!(cache.load("k").unwrap().is_none());
}

#[test]
fn entry_at_exactly_the_ttl_is_still_fresh() {
    let dir = temp_dir("cache_ttl_edge");
    let cache = TableCache::new(dir.clone(), true, 7);

    cache.store(&listing_table(), "k").unwrap();
    backdate(&dir.join("k.csv"), 7);

    assert!(cache.load("k").unwrap().is_some());
}

#[test]
fn store_overwrites_existing_entry() {
    let cache = TableCache::new(temp_dir("cache_overwrite"), true, 7);

    cache.store(&listing_table(), "k").unwrap();
    let mut smaller = DataTable::new(["address"]);
    smaller.push_row(vec![Some("1 Main".into())]).unwrap();
    cache.store(&smaller, "k").unwrap();

    assert_eq!(cache.load("k").unwrap(), Some(smaller));
}

#[test]
fn malformed_cache_file_is_an_error_not_a_miss() {
    let dir = temp_dir("cache_malformed");
    let cache = TableCache::new(dir.clone(), true, 7);
    // Ragged row: three fields under a two-column header.
    fs::write(dir.join("k.csv"), "address,price\n1 Main,100,extra\n").unwrap();

    assert!(matches!(cache.load("k"), Err(ScrapeError::Csv(_))));
}

#[test]
fn null_cells_survive_a_cache_round_trip() {
    let cache = TableCache::new(temp_dir("cache_nulls"), true, 7);
    let mut table = DataTable::new(["address", "price"]);
    table
        .push_row(vec![Some("100 Elm St".into()), None])
        .unwrap();

    cache.store(&table, "k").unwrap();
    let loaded = cache.load("k").unwrap().unwrap();

    assert_eq!(loaded.value(0, "price"), None);
    assert_eq!(loaded, table);
}

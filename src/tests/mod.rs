// src/tests/mod.rs
mod utils;

mod cache_tests;

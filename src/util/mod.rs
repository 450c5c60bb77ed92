// src/util/mod.rs
pub mod files;
pub mod helpers;

pub use files::FileError;

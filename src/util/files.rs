// src/util/files.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and deserialize a YAML document.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let text = read_text(path)?;
    Ok(serde_yml::from_str(&text)?)
}

/// Read and deserialize a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, FileError> {
    let text = read_text(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize `value` as pretty-printed JSON, creating parent directories
/// as needed.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), FileError> {
    if let Some(parent) = path.parent() {
        // A bare filename has an empty parent; create_dir_all would fail on it.
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

/// Create `path` and any missing ancestors, returning the path for chaining.
pub fn ensure_dir(path: &Path) -> Result<PathBuf, FileError> {
    fs::create_dir_all(path)?;
    Ok(path.to_path_buf())
}

fn read_text(path: &Path) -> Result<String, FileError> {
    if !path.exists() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

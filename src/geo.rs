// src/geo.rs
use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::util::files::{load_yaml, FileError};

/// Conventional location of the ZIP code document.
pub const DEFAULT_ZIP_CONFIG: &str = "config/dfw_zips.yaml";

/// Inclusive latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
            && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// Dallas-Fort Worth metro bounding box.
pub const DFW_BOUNDS: GeoBounds = GeoBounds {
    lat_min: 32.5,
    lat_max: 33.2,
    lon_min: -97.5,
    lon_max: -96.8,
};

/// True when the point lies inside the DFW metro box.
pub fn validate_coordinates(lat: f64, lon: f64) -> bool {
    DFW_BOUNDS.contains(lat, lon)
}

#[derive(Debug, Deserialize)]
struct ZipConfig {
    zip_codes: BTreeMap<String, Vec<String>>,
}

/// Load the ZIP code document, a YAML map of county name to ZIP list under
/// a `zip_codes` key. Codes come back flattened across counties,
/// deduplicated, and sorted.
pub fn dfw_zip_codes(config_path: &Path) -> Result<Vec<String>, FileError> {
    let config: ZipConfig = load_yaml(config_path)?;
    let mut zips: Vec<String> = config.zip_codes.into_values().flatten().collect();
    zips.sort();
    zips.dedup();
    debug!(count = zips.len(), "loaded zip codes");
    Ok(zips)
}

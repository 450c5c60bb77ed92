// src/util/helpers.rs
use std::collections::BTreeMap;

use chrono::{Datelike, Local};
use sha2::{Digest, Sha256};

/// SHA-256 hex digest over positional parts plus named parameters.
/// The named map is a `BTreeMap`, so iteration is key-sorted and the digest
/// is independent of insertion order.
pub fn hashed_key(positional: &[&str], named: &BTreeMap<String, String>) -> String {
    let mut canonical = String::new();
    for part in positional {
        canonical.push_str(part);
        canonical.push('|');
    }
    for (key, value) in named {
        canonical.push_str(key);
        canonical.push('=');
        canonical.push_str(value);
        canonical.push('|');
    }

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Dollar-formatted price with thousands separators and no decimals.
pub fn format_price(price: f64) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Property age in years, clamped at zero for not-yet-built years.
/// Without a reference year the current local calendar year is used.
pub fn calculate_age(year_built: i32, reference_year: Option<i32>) -> i32 {
    let reference = reference_year.unwrap_or_else(|| Local::now().year());
    (reference - year_built).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_key_ignores_insertion_order() {
        let mut forward = BTreeMap::new();
        forward.insert("city".to_string(), "dallas".to_string());
        forward.insert("zip".to_string(), "75201".to_string());

        let mut reversed = BTreeMap::new();
        reversed.insert("zip".to_string(), "75201".to_string());
        reversed.insert("city".to_string(), "dallas".to_string());

        assert_eq!(
            hashed_key(&["listings"], &forward),
            hashed_key(&["listings"], &reversed)
        );
    }

    #[test]
    fn hashed_key_changes_with_input() {
        let named = BTreeMap::new();
        assert_ne!(hashed_key(&["a"], &named), hashed_key(&["b"], &named));
    }

    #[test]
    fn hashed_key_is_lowercase_hex() {
        let key = hashed_key(&["listings"], &BTreeMap::new());
        assert_eq!(key.len(), 64);
        assert!(key
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn format_price_groups_thousands() {
        assert_eq!(format_price(450000.0), "$450,000");
        assert_eq!(format_price(1234567.0), "$1,234,567");
        assert_eq!(format_price(999.0), "$999");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn format_price_rounds_and_keeps_sign_inside() {
        assert_eq!(format_price(450000.6), "$450,001");
        assert_eq!(format_price(-1500.0), "$-1,500");
    }

    #[test]
    fn calculate_age_with_reference_year() {
        assert_eq!(calculate_age(2000, Some(2024)), 24);
        assert_eq!(calculate_age(2024, Some(2024)), 0);
    }

    #[test]
    fn calculate_age_never_negative() {
        assert_eq!(calculate_age(2030, Some(2024)), 0);
    }

    #[test]
    fn calculate_age_defaults_to_current_year() {
        let year = Local::now().year();
        assert_eq!(calculate_age(year, None), 0);
        assert!(calculate_age(1950, None) >= 74);
    }
}

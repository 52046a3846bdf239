//! Storage-tier labels and their capacity ordering.

use std::cmp::Ordering;

/// Placeholder storage label meaning "capacity unspecified, assume base".
///
/// Carriers that publish one price per model (not per tier) use it.
pub const STORAGE_SENTINEL: &str = "最小容量";

/// Storage filters under which sentinel listings are still shown.
pub const SENTINEL_COMPATIBLE_STORAGE: [&str; 3] = ["128GB", "64GB", "256GB"];

/// Whether a storage label is the "unspecified/minimum capacity" sentinel.
#[must_use]
pub fn is_sentinel(storage: &str) -> bool {
    storage == STORAGE_SENTINEL
}

/// Capacity in gigabytes parsed from a label such as `256GB` or `1TB`.
///
/// Only the leading decimal digits are read; a `TB` anywhere in the label
/// multiplies them by 1024. Returns `None` for labels without a leading
/// non-zero number (`最小容量`, `Unknown`, ...).
#[must_use]
pub fn capacity_gb(label: &str) -> Option<u64> {
    let trimmed = label.trim_start();
    let digits: &str = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    let value: u64 = digits.parse().ok()?;
    if value == 0 {
        return None;
    }
    if label.contains("TB") {
        value.checked_mul(1024)
    } else {
        Some(value)
    }
}

/// Orders storage labels by capacity, smallest first.
///
/// Labels without a parseable capacity sort after every numeric one and
/// compare equal among themselves.
#[must_use]
pub fn compare_capacity(a: &str, b: &str) -> Ordering {
    let key = |s: &str| capacity_gb(s).unwrap_or(u64::MAX);
    key(a).cmp(&key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_parsing() {
        assert_eq!(capacity_gb("64GB"), Some(64));
        assert_eq!(capacity_gb("128GB"), Some(128));
        assert_eq!(capacity_gb("1TB"), Some(1024));
        assert_eq!(capacity_gb("2TB"), Some(2048));
        assert_eq!(capacity_gb(STORAGE_SENTINEL), None);
        assert_eq!(capacity_gb("Unknown"), None);
        assert_eq!(capacity_gb(""), None);
    }

    #[test]
    fn test_terabytes_sort_after_gigabytes() {
        let mut labels = vec!["1TB", "256GB", "Unknown", "128GB", "512GB", "64GB"];
        labels.sort_by(|a, b| compare_capacity(a, b));
        assert_eq!(
            labels,
            vec!["64GB", "128GB", "256GB", "512GB", "1TB", "Unknown"]
        );
    }

    #[test]
    fn test_sentinel_detection() {
        assert!(is_sentinel("最小容量"));
        assert!(!is_sentinel("128GB"));
    }
}

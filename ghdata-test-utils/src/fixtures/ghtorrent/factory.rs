use chrono::{NaiveDate, NaiveDateTime};

/// Creation time used by fixtures that take no explicit timestamp.
pub static DEFAULT_CREATED_AT: &str = "2016-01-04 12:00:00";

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// # Panics
/// Panics if `value` is not in that format.
pub fn timestamp(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|e| panic!("invalid fixture timestamp {:?}: {}", value, e))
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Panics
/// Panics if `value` is not in that format.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("invalid fixture date {:?}: {}", value, e))
}

/// URL stored for fixture projects.
pub fn project_url(owner_id: i64, name: &str) -> String {
    format!("https://api.github.com/repos/{}/{}", owner_id, name)
}

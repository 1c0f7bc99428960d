//! ISO-8601 text timestamps. Every stored date uses the same millisecond UTC
//! layout so lexical order matches chronological order.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339, a naive date-time (taken as UTC) or a bare date (midnight UTC).
pub fn normalize(field: &str, raw: &str) -> Result<String, AppError> {
    let raw = raw.trim();
    let parsed = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(&Utc))
    } else if let Some(naive) = parse_naive(raw) {
        Some(naive.and_utc())
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    };
    parsed
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| AppError::BadRequest(format!("Data inválida em {}: '{}'", field, raw)))
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

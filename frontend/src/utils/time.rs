use chrono::{DateTime, NaiveDateTime, NaiveTime};

const CREATED_AT_FORMAT: &str = "%d %b %Y %H:%M";

/// Formats a backend timestamp as `22 Jul 2025 01:01`. Offsets are dropped;
/// the wall-clock value the server sent is shown as-is.
pub fn format_created_at(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local().format(CREATED_AT_FORMAT).to_string());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|parsed| parsed.format(CREATED_AT_FORMAT).to_string())
}

pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

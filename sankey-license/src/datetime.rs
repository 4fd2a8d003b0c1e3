//! ISO-8601 UTC timestamp parsing for license date fields.

use chrono::NaiveDateTime;

/// Parses `YYYY-MM-DDTHH:MM:SS`, optionally followed by fractional
/// seconds and a trailing `Z`, as a UTC instant in epoch seconds.
///
/// The timestamp is always interpreted as UTC, never local time; expiry
/// comparisons are against wall-clock UTC now. Fractional seconds are
/// accepted and truncated.
///
/// Returns `None` on any parse failure. Callers treat `None` as "no time
/// constraint", not as an error.
#[must_use]
pub fn parse_iso_datetime(text: &str) -> Option<i64> {
    let (datetime, rest) = NaiveDateTime::parse_and_remainder(text, "%Y-%m-%dT%H:%M:%S").ok()?;
    if !is_valid_suffix(rest) {
        return None;
    }
    Some(datetime.and_utc().timestamp())
}

/// Accepts the tail after the seconds field: empty, `Z`, or fractional
/// digits with an optional `Z`.
fn is_valid_suffix(rest: &str) -> bool {
    let rest = rest.strip_suffix('Z').unwrap_or(rest);
    if rest.is_empty() {
        return true;
    }
    match rest.strip_prefix('.') {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

//! Timestamp decoding for `startedDateTime`.
//!
//! Only offsets between records of the same trace matter, so the zone suffix
//! is thrown away and the wall-clock value is read in the host's local zone.

use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime, TimeZone};
use regex::Regex;

use super::TraceError;

/// Match: "YYYY-mm-ddTHH:MM:SS[.fff][Z|+HH:MM|-HHMM]"
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2})(?:\.(\d+))?(?:Z|[+-]\d{2}:?\d{2})?$")
        .expect("Invalid timestamp regex")
});

fn invalid(value: &str, reason: impl Into<String>) -> TraceError {
    TraceError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Milliseconds from the fractional-second digits.
///
/// "123" is 123 ms, "5" is 500 ms, "123456" is 123 ms.
fn fraction_to_millis(fraction: &str) -> i64 {
    fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(3)
        .fold(0, |acc, digit| acc * 10 + digit.to_digit(10).unwrap_or(0) as i64)
}

/// Decode a HAR timestamp to milliseconds since the epoch (local time)
pub fn decode_timestamp(value: &str) -> Result<i64, TraceError> {
    let caps = TIMESTAMP
        .captures(value.trim())
        .ok_or_else(|| invalid(value, "expected YYYY-mm-ddTHH:MM:SS.fff with an optional zone"))?;

    let wall_clock = &caps[1];
    let naive = NaiveDateTime::parse_from_str(wall_clock, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| invalid(value, e.to_string()))?;

    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| invalid(value, "wall-clock time does not exist in the local timezone"))?;

    let millis = caps.get(2).map_or(0, |m| fraction_to_millis(m.as_str()));

    Ok(local.timestamp_millis() + millis)
}

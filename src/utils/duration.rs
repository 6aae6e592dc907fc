//! Duration parsing utilities.
//!
//! Pause times in the traffic graph are whole seconds. Configuration accepts
//! them either as raw seconds or with a unit suffix (e.g. "60", "90s", "2m").

/// Accepted unit suffixes and their multiplier in seconds.
///
/// Longer suffixes come first so that "mins" is not matched as "s".
const UNITS: &[(&str, u64)] = &[
    ("seconds", 1),
    ("second", 1),
    ("secs", 1),
    ("sec", 1),
    ("s", 1),
    ("minutes", 60),
    ("minute", 60),
    ("mins", 60),
    ("min", 60),
    ("m", 60),
    ("hours", 3600),
    ("hour", 3600),
    ("hrs", 3600),
    ("hr", 3600),
    ("h", 3600),
];

/// Parse duration string (e.g., "15", "90s", "2m", "1h") to seconds
///
/// # Arguments
/// * `duration` - The duration string to parse
///
/// # Returns
/// * `Ok(u64)` - The duration in seconds if parsing succeeds
/// * `Err(String)` - An error message if parsing fails
///
/// # Examples
/// ```
/// use hargraph::utils::duration::parse_duration_to_seconds;
///
/// assert_eq!(parse_duration_to_seconds("60"), Ok(60));
/// assert_eq!(parse_duration_to_seconds("2m"), Ok(120));
/// assert!(parse_duration_to_seconds("soon").is_err());
/// ```
pub fn parse_duration_to_seconds(duration: &str) -> Result<u64, String> {
    let duration = duration.trim();

    if let Ok(seconds) = duration.parse::<u64>() {
        return Ok(seconds);
    }

    let digits_end = duration
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(duration.len());
    let (number, unit) = duration.split_at(digits_end);

    if number.is_empty() {
        return Err(format!("Invalid duration format: {}", duration));
    }

    let multiplier = UNITS
        .iter()
        .find(|(suffix, _)| *suffix == unit.trim())
        .map(|(_, multiplier)| *multiplier)
        .ok_or_else(|| format!("Invalid duration format: {}", duration))?;

    number
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .ok_or_else(|| format!("Duration out of range: {}", duration))
}

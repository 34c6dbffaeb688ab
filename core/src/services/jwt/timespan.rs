//! Human-readable time span parsing for token expiries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConfigError;

/// Grammar for expiry spans: an unsigned integer followed by exactly one
/// unit character (s/m/h/d). "ms" and bare numbers are not valid.
static TIMESPAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)([smhd])$").unwrap());

/// Converts a time span like "15m" or "7d" to seconds
///
/// # Returns
///
/// * `Ok(seconds)` - The parsed duration
/// * `Err(ConfigError::InvalidTimespan)` - The input does not match the grammar
pub fn parse_time_to_seconds(spec: &str) -> Result<i64, ConfigError> {
    let invalid = || ConfigError::InvalidTimespan {
        value: spec.to_string(),
    };

    let caps = TIMESPAN_REGEX.captures(spec).ok_or_else(invalid)?;
    let value: i64 = caps[1].parse().map_err(|_| invalid())?;
    let multiplier = match &caps[2] {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => unreachable!(),
    };

    value.checked_mul(multiplier).ok_or_else(invalid)
}

/// Checks whether a span matches the grammar and is non-zero
///
/// A zero-duration expiry ("0s", "0m") is rejected: a token that expires at
/// its own issuance instant is never usable.
pub fn is_valid_timespan(spec: &str) -> bool {
    match parse_time_to_seconds(spec) {
        Ok(seconds) => seconds > 0,
        Err(_) => false,
    }
}

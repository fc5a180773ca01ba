//! Pace and clock formatting.
//!
//! Both formatters truncate fractional seconds. A 299.9 s/km pace reads
//! `4:59`, never `5:00`.

use crate::calculator::PaceError;
use crate::constants::{SECS_PER_HOUR, SECS_PER_MIN};

/// Format a per-kilometer pace in seconds as `m:ss`.
///
/// Minutes are not padded; seconds always have two digits.
/// Non-finite or negative input formats as `0:00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_pace(seconds_per_km: f64) -> String {
    let p = sanitize(seconds_per_km);
    let minutes = (p / 60.0).floor() as u64;
    let seconds = (p % 60.0).floor() as u64;
    format!("{minutes}:{seconds:02}")
}

/// Format elapsed seconds as `hh:mm:ss`.
///
/// Hours widen past two digits for very long efforts.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_clock(seconds: f64) -> String {
    let s = sanitize(seconds);
    let hrs = (s / 3600.0).floor() as u64;
    let mins = ((s % 3600.0) / 60.0).floor() as u64;
    let secs = (s % 60.0).floor() as u64;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}

/// Parse `hh:mm:ss`, `mm:ss`, or `ss` into whole seconds.
///
/// The leading field is unbounded; every following field must be below 60.
pub fn parse_clock(input: &str) -> Result<u64, PaceError> {
    let s = input.trim();
    let invalid = || PaceError::InvalidTime(input.to_string());

    let fields: Vec<&str> = s.split(':').collect();
    if fields.is_empty() || fields.len() > 3 {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    for (idx, field) in fields.iter().enumerate() {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = field.parse().map_err(|_| invalid())?;
        if idx > 0 && value >= SECS_PER_MIN {
            return Err(invalid());
        }
        total = total
            .checked_mul(SECS_PER_MIN)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(invalid)?;
    }
    Ok(total)
}

/// Format whole seconds compactly as `h:mm:ss`, or `m:ss` under an hour.
#[must_use]
pub fn format_target(total_seconds: u64) -> String {
    let hrs = total_seconds / SECS_PER_HOUR;
    let mins = (total_seconds % SECS_PER_HOUR) / SECS_PER_MIN;
    let secs = total_seconds % SECS_PER_MIN;
    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

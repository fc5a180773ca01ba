//! Target finish time built from hour, minute, and second fields.

use serde::{Deserialize, Serialize};

use crate::calculator::PaceError;
use crate::constants::{DEFAULT_TARGET_SECS, SECS_PER_HOUR, SECS_PER_MIN};
use crate::format::{format_target, parse_clock};

/// A target finish time. Fields are never negative and are not capped at 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TargetTime {
    /// Build from signed fields, clamping each to zero.
    #[must_use]
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            hours: hours.max(0).unsigned_abs(),
            minutes: minutes.max(0).unsigned_abs(),
            seconds: seconds.max(0).unsigned_abs(),
        }
    }

    /// Build from raw text fields. Each field goes through [`parse_field`].
    #[must_use]
    pub fn from_fields(hours: &str, minutes: &str, seconds: &str) -> Self {
        Self::new(parse_field(hours), parse_field(minutes), parse_field(seconds))
    }

    /// Total duration in seconds, saturating on overflow.
    #[must_use]
    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(SECS_PER_HOUR)
            .saturating_add(self.minutes.saturating_mul(SECS_PER_MIN))
            .saturating_add(self.seconds)
    }

    /// Split a whole-second duration back into normalized fields.
    #[must_use]
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            hours: total / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MIN,
            seconds: total % SECS_PER_MIN,
        }
    }
}

impl Default for TargetTime {
    fn default() -> Self {
        Self::from_total_seconds(DEFAULT_TARGET_SECS)
    }
}

impl std::str::FromStr for TargetTime {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clock(s).map(Self::from_total_seconds)
    }
}

impl std::fmt::Display for TargetTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_target(self.total_seconds()))
    }
}

/// Leniently parse a numeric input field.
///
/// Skips leading whitespace, accepts an optional sign, then reads leading
/// digits and ignores the rest. No digits at all yields 0. Values past
/// `i64` saturate.
#[must_use]
pub fn parse_field(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_fields_clamp_to_zero() {
        let t = TargetTime::new(-1, 25, -30);
        assert_eq!(t, TargetTime { hours: 0, minutes: 25, seconds: 0 });
        assert_eq!(t.total_seconds(), 1500);
    }

    #[test]
    fn minutes_not_capped() {
        assert_eq!(TargetTime::new(0, 90, 0).total_seconds(), 5400);
    }

    #[test]
    fn total_saturates() {
        let t = TargetTime::new(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(t.total_seconds(), u64::MAX);
    }

    #[test]
    fn default_is_thirty_minutes() {
        assert_eq!(TargetTime::default().total_seconds(), 1800);
        assert_eq!(TargetTime::default().to_string(), "30:00");
    }

    #[test]
    fn lenient_field_parsing() {
        assert_eq!(parse_field("42"), 42);
        assert_eq!(parse_field("  7"), 7);
        assert_eq!(parse_field("12abc"), 12);
        assert_eq!(parse_field("+5"), 5);
        assert_eq!(parse_field("-3"), -3);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("-"), 0);
        assert_eq!(parse_field("1.9"), 1);
    }

    #[test]
    fn from_fields_normalizes() {
        let t = TargetTime::from_fields("1", "-10", "x");
        assert_eq!(t.total_seconds(), 3600);
    }

    #[test]
    fn from_str_round_trips() {
        let t: TargetTime = "1:45:30".parse().unwrap();
        assert_eq!(t, TargetTime { hours: 1, minutes: 45, seconds: 30 });
        assert_eq!(t.to_string(), "1:45:30");
        assert!("1:xx".parse::<TargetTime>().is_err());
    }
}

//! Constants for pace multipliers, split curves, and animation scaling.

/// Seconds per minute.
pub const SECS_PER_MIN: u64 = 60;

/// Seconds per hour.
pub const SECS_PER_HOUR: u64 = 3600;

/// Default target time used when no input is given (0:30:00).
pub const DEFAULT_TARGET_SECS: u64 = 30 * SECS_PER_MIN;

/// Longest distance a plan is computed for. Anything longer yields an
/// empty plan.
pub const MAX_DISTANCE_KM: f64 = 10_000.0;

/// How far the negative and positive split curves drift from even pace
/// by the final kilometer.
pub const SPLIT_CURVE_SPREAD: f64 = 0.1;

/// Split multiplier for the first half of a conservative start.
pub const CONSERVATIVE_EARLY_FACTOR: f64 = 1.1;

/// Split multiplier for the second half of a conservative start.
pub const CONSERVATIVE_LATE_FACTOR: f64 = 0.9;

/// Numerator of the animation speed formula (`500 / base_pace`).
pub const ANIMATION_PACE_REFERENCE: f64 = 500.0;

/// Slowest animation speed.
pub const MIN_ANIMATION_SPEED: f64 = 0.5;

/// Fastest animation speed.
pub const MAX_ANIMATION_SPEED: f64 = 5.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (bad time, distance, or strategy).
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_thirty_minutes() {
        assert_eq!(DEFAULT_TARGET_SECS, 1800);
    }

    #[test]
    fn max_distance_fits_split_index() {
        assert!(MAX_DISTANCE_KM < f64::from(u32::MAX));
    }

    #[test]
    fn animation_bounds_ordered() {
        assert!(MIN_ANIMATION_SPEED < MAX_ANIMATION_SPEED);
    }

    #[test]
    fn conservative_factors_straddle_even() {
        assert!(CONSERVATIVE_EARLY_FACTOR > 1.0);
        assert!(CONSERVATIVE_LATE_FACTOR < 1.0);
    }
}

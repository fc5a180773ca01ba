//! Pacing strategy trait and the four built-in strategies.
//!
//! A strategy scales the base pace for its headline per-km figure and
//! bends the cumulative split curve. `split_seconds` is the shared
//! `km * base_pace * factor` evaluation; strategies only supply the factor.

use crate::constants::{CONSERVATIVE_EARLY_FACTOR, CONSERVATIVE_LATE_FACTOR, SPLIT_CURVE_SPREAD};

/// Interface for a pacing strategy.
pub trait PacingStrategy: Send + Sync {
    /// Display name, e.g. "Negative Split".
    fn name(&self) -> &str;

    /// Short lookup key, e.g. "negative".
    fn slug(&self) -> &str;

    /// One-line description of how the race is run.
    fn description(&self) -> &str;

    /// Multiplier applied to the base pace for the headline pace.
    fn pace_multiplier(&self) -> f64;

    /// Multiplier applied to the even-pace split at kilometer `km` of `total_km`.
    fn split_factor(&self, km: u32, total_km: u32) -> f64;

    /// Multiplier applied to the plan's animation speed for this strategy.
    fn animation_multiplier(&self) -> f64 {
        1.0
    }

    /// Cumulative elapsed seconds at kilometer `km`.
    fn split_seconds(&self, km: u32, total_km: u32, base_pace: f64) -> f64 {
        f64::from(km) * base_pace * self.split_factor(km, total_km)
    }
}

/// Same pace every kilometer.
pub struct EvenPace;

impl PacingStrategy for EvenPace {
    fn name(&self) -> &'static str {
        "Even Pace"
    }

    fn slug(&self) -> &'static str {
        "even"
    }

    fn description(&self) -> &'static str {
        "Maintain consistent pace throughout"
    }

    fn pace_multiplier(&self) -> f64 {
        1.0
    }

    fn split_factor(&self, _km: u32, _total_km: u32) -> f64 {
        1.0
    }
}

/// Splits shrink linearly toward the finish.
pub struct NegativeSplit;

impl PacingStrategy for NegativeSplit {
    fn name(&self) -> &'static str {
        "Negative Split"
    }

    fn slug(&self) -> &'static str {
        "negative"
    }

    fn description(&self) -> &'static str {
        "Start slower, finish faster"
    }

    fn pace_multiplier(&self) -> f64 {
        0.95
    }

    fn split_factor(&self, km: u32, total_km: u32) -> f64 {
        1.0 - (f64::from(km) / f64::from(total_km)) * SPLIT_CURVE_SPREAD
    }

    fn animation_multiplier(&self) -> f64 {
        1.3
    }
}

/// Splits grow linearly toward the finish.
pub struct PositiveSplit;

impl PacingStrategy for PositiveSplit {
    fn name(&self) -> &'static str {
        "Positive Split"
    }

    fn slug(&self) -> &'static str {
        "positive"
    }

    fn description(&self) -> &'static str {
        "Start faster, settle in later"
    }

    fn pace_multiplier(&self) -> f64 {
        1.05
    }

    fn split_factor(&self, km: u32, total_km: u32) -> f64 {
        1.0 + (f64::from(km) / f64::from(total_km)) * SPLIT_CURVE_SPREAD
    }

    fn animation_multiplier(&self) -> f64 {
        0.7
    }
}

/// Step curve: slow first half, fast second half.
pub struct ConservativeStart;

impl PacingStrategy for ConservativeStart {
    fn name(&self) -> &'static str {
        "Conservative Start"
    }

    fn slug(&self) -> &'static str {
        "conservative"
    }

    fn description(&self) -> &'static str {
        "Easy start, strong finish"
    }

    fn pace_multiplier(&self) -> f64 {
        0.9
    }

    fn split_factor(&self, km: u32, total_km: u32) -> f64 {
        if f64::from(km) < f64::from(total_km) / 2.0 {
            CONSERVATIVE_EARLY_FACTOR
        } else {
            CONSERVATIVE_LATE_FACTOR
        }
    }
}

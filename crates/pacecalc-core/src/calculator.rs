//! Pace plan calculation.
//!
//! `PaceCalculator` turns a target duration and a distance into one
//! `PaceStrategy` per registered pacing strategy. Invalid input never
//! errors; it produces an empty plan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANIMATION_PACE_REFERENCE, MAX_ANIMATION_SPEED, MAX_DISTANCE_KM, MIN_ANIMATION_SPEED,
};
use crate::format::{format_clock, format_pace};
use crate::registry::{DefaultRegistry, StrategyRegistry};
use crate::strategy::PacingStrategy;

/// Animation speed reported for a plan with no strategies.
const IDLE_ANIMATION_SPEED: f64 = 1.0;

/// Error type for input handling around the calculator.
#[derive(Debug, thiserror::Error)]
pub enum PaceError {
    /// A time string could not be parsed.
    #[error("invalid time: {0:?} (expected hh:mm:ss, mm:ss, or ss)")]
    InvalidTime(String),

    /// Distance name is not one of the known races.
    #[error("unknown distance: {0:?} (expected 5K, 10K, 21K, or 42K)")]
    UnknownDistance(String),

    /// Strategy name is not registered.
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),

    /// Plan could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Cumulative time at a kilometer marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// 1-based kilometer index.
    pub km: u32,
    /// Elapsed time as `hh:mm:ss`.
    pub time: String,
}

/// A fully evaluated pacing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceStrategy {
    pub name: String,
    pub description: String,
    /// Average pace per kilometer as `m:ss`.
    pub pace: String,
    pub splits: Vec<Split>,
    /// Cosmetic animation speed for this strategy.
    pub animation_speed: f64,
}

/// Output of a calculation: inputs, derived pace, and strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacePlan {
    pub total_seconds: u64,
    pub distance_km: f64,
    /// Seconds per kilometer; 0 when the plan is empty.
    pub base_pace: f64,
    pub animation_speed: f64,
    pub strategies: Vec<PaceStrategy>,
}

impl PacePlan {
    /// True when the inputs could not produce any strategy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PaceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Calculator over a fixed set of strategies.
pub struct PaceCalculator {
    strategies: Vec<Arc<dyn PacingStrategy>>,
}

impl PaceCalculator {
    /// Calculator over every built-in strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategies(DefaultRegistry::new().all().to_vec())
    }

    /// Calculator over the given strategies, in the given order.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Arc<dyn PacingStrategy>>) -> Self {
        Self { strategies }
    }

    /// Compute the full plan.
    ///
    /// Distances past [`MAX_DISTANCE_KM`] are treated like invalid input.
    #[must_use]
    pub fn plan(&self, total_seconds: u64, distance_km: f64) -> PacePlan {
        let Some(total_km) = whole_kilometers(distance_km).filter(|_| total_seconds > 0) else {
            tracing::debug!(total_seconds, distance_km, "input out of range, empty plan");
            return PacePlan {
                total_seconds,
                distance_km,
                base_pace: 0.0,
                animation_speed: IDLE_ANIMATION_SPEED,
                strategies: Vec::new(),
            };
        };

        #[allow(clippy::cast_precision_loss)]
        let base_pace = total_seconds as f64 / distance_km;
        let speed = animation_speed(base_pace);

        tracing::debug!(
            total_seconds,
            distance_km,
            base_pace,
            total_km,
            "generating pace strategies"
        );

        let strategies = self
            .strategies
            .iter()
            .map(|s| evaluate(s.as_ref(), base_pace, total_km, speed))
            .collect();

        PacePlan {
            total_seconds,
            distance_km,
            base_pace,
            animation_speed: speed,
            strategies,
        }
    }

    /// Compute only the strategies.
    #[must_use]
    pub fn generate(&self, total_seconds: u64, distance_km: f64) -> Vec<PaceStrategy> {
        self.plan(total_seconds, distance_km).strategies
    }
}

impl Default for PaceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate all four strategies for a duration and distance.
///
/// Returns an empty list when either input is non-positive, or the
/// distance is longer than [`MAX_DISTANCE_KM`].
///
/// # Example
/// ```
/// let strategies = pacecalc_core::generate_strategies(1500, 5.0);
/// assert_eq!(strategies[0].pace, "5:00");
/// assert_eq!(strategies[0].splits[4].time, "00:25:00");
/// assert!(pacecalc_core::generate_strategies(0, 5.0).is_empty());
/// ```
#[must_use]
pub fn generate_strategies(total_seconds: u64, distance_km: f64) -> Vec<PaceStrategy> {
    PaceCalculator::new().generate(total_seconds, distance_km)
}

/// Compute the full plan with all four strategies.
#[must_use]
pub fn plan(total_seconds: u64, distance_km: f64) -> PacePlan {
    PaceCalculator::new().plan(total_seconds, distance_km)
}

/// Animation speed for a base pace: `500 / base_pace`, clamped to `[0.5, 5]`.
///
/// Faster paces animate faster. Non-positive paces get the slowest speed.
#[must_use]
pub fn animation_speed(base_pace: f64) -> f64 {
    if base_pace.is_nan() || base_pace <= 0.0 {
        return MIN_ANIMATION_SPEED;
    }
    (ANIMATION_PACE_REFERENCE / base_pace).clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED)
}

/// Whole kilometers in a valid distance; `None` for non-positive,
/// non-finite, or over-long distances.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_kilometers(distance_km: f64) -> Option<u32> {
    if !distance_km.is_finite() || distance_km <= 0.0 || distance_km > MAX_DISTANCE_KM {
        return None;
    }
    // Bounded above, so the floor always fits.
    Some(distance_km.floor() as u32)
}

fn evaluate(
    strategy: &dyn PacingStrategy,
    base_pace: f64,
    total_km: u32,
    plan_speed: f64,
) -> PaceStrategy {
    let splits: Vec<Split> = (1..=total_km)
        .map(|km| Split {
            km,
            time: format_clock(strategy.split_seconds(km, total_km, base_pace)),
        })
        .collect();

    tracing::trace!(strategy = strategy.name(), splits = splits.len(), "evaluated");

    PaceStrategy {
        name: strategy.name().to_string(),
        description: strategy.description().to_string(),
        pace: format_pace(base_pace * strategy.pace_multiplier()),
        splits,
        animation_speed: plan_speed * strategy.animation_multiplier(),
    }
}

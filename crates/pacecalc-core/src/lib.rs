//! # pacecalc-core
//!
//! Core library for PaceCalc. Turns a target finish time and a race
//! distance into four pacing strategies (even, negative split, positive
//! split, conservative start), each with a per-km pace and kilometer splits.

pub mod calculator;
pub mod constants;
pub mod distance;
pub mod format;
pub mod registry;
pub mod strategy;
pub mod time;

// Re-exports
pub use calculator::{
    animation_speed, generate_strategies, plan, PaceCalculator, PaceError, PacePlan,
    PaceStrategy, Split,
};
pub use constants::exit_codes;
pub use distance::RaceDistance;
pub use format::{format_clock, format_pace, format_target, parse_clock};
pub use registry::{DefaultRegistry, StrategyRegistry};
pub use strategy::PacingStrategy;
pub use time::{parse_field, TargetTime};

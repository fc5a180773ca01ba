//! Plan presenters.
//!
//! Presenters render to a `String` so the caller decides between stdout
//! and a file.

use pacecalc_core::{PaceError, PacePlan};

use crate::output::{format_distance, format_speed, format_split_grid};
use crate::ui;

/// Labels describing the inputs a plan was computed from.
#[derive(Debug, Clone)]
pub struct PlanHeader {
    /// Distance label, e.g. `21K` or `7.5 km`.
    pub distance: String,
    /// Target time, e.g. `1:45:00`.
    pub target: String,
}

/// Trait for rendering a plan.
pub trait PlanPresenter {
    /// Render the plan.
    fn render(&self, header: &PlanHeader, plan: &PacePlan) -> Result<String, PaceError>;
}

/// Human-readable text presenter.
pub struct TextPresenter {
    verbose: bool,
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn render_quiet(plan: &PacePlan) -> String {
        plan.strategies
            .iter()
            .map(|s| format!("{} {}", s.name, s.pace))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PlanPresenter for TextPresenter {
    fn render(&self, header: &PlanHeader, plan: &PacePlan) -> Result<String, PaceError> {
        if self.quiet {
            return Ok(Self::render_quiet(plan));
        }

        let mut lines = vec![
            ui::header(&format!(
                "Race Plan: {} ({})",
                header.distance,
                format_distance(plan.distance_km)
            )),
            format!("Target time: {}", header.target),
        ];

        if plan.is_empty() {
            lines.push(String::new());
            lines.push("No strategies: target time and distance must both be positive.".into());
            return Ok(lines.join("\n"));
        }

        if self.verbose {
            lines.push(format!("Base pace: {:.2} s/km", plan.base_pace));
        }
        lines.push(format!(
            "Animation speed: {}",
            format_speed(plan.animation_speed)
        ));

        for strategy in &plan.strategies {
            lines.push(String::new());
            lines.push(ui::strategy_title(&strategy.name, &strategy.pace));
            lines.push(format!("  {}", ui::muted(&strategy.description)));
            if self.verbose {
                lines.push(format!(
                    "  Animation speed: {}",
                    format_speed(strategy.animation_speed)
                ));
            }
            if !strategy.splits.is_empty() {
                lines.push("  Kilometer splits:".into());
                lines.push(format_split_grid(&strategy.splits, "    "));
            }
        }

        Ok(lines.join("\n"))
    }
}

/// JSON presenter.
pub struct JsonPresenter;

impl PlanPresenter for JsonPresenter {
    fn render(&self, _header: &PlanHeader, plan: &PacePlan) -> Result<String, PaceError> {
        plan.to_json()
    }
}

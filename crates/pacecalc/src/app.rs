//! Application entry point and dispatch.

use anyhow::{Context, Result};

use pacecalc_cli::output::{format_distance, write_to_file};
use pacecalc_cli::{JsonPresenter, PlanHeader, PlanPresenter, TextPresenter};
use pacecalc_core::{DefaultRegistry, PaceCalculator, RaceDistance, StrategyRegistry};

use crate::config::{AppConfig, OutputFormat};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pacecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list_distances {
        print!("{}", render_distances());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let target = config.target_time()?;
    let distance = config.distance_selection()?;

    let calculator = match &config.strategy {
        Some(name) => PaceCalculator::with_strategies(vec![DefaultRegistry::new().get(name)?]),
        None => PaceCalculator::new(),
    };

    let plan = calculator.plan(target.total_seconds(), distance.km);
    if plan.is_empty() {
        tracing::warn!(
            total_seconds = plan.total_seconds,
            distance_km = plan.distance_km,
            "target time and distance must both be positive; no strategies produced"
        );
    } else {
        tracing::debug!(
            base_pace = plan.base_pace,
            strategies = plan.strategies.len(),
            "plan computed"
        );
    }

    let presenter: Box<dyn PlanPresenter> = match config.format {
        OutputFormat::Text => Box::new(TextPresenter::new(config.verbose, config.quiet)),
        OutputFormat::Json => Box::new(JsonPresenter),
    };

    // Files never get ANSI styling.
    if config.output.is_some() {
        console::set_colors_enabled(false);
    }

    let header = PlanHeader {
        distance: distance.label,
        target: target.to_string(),
    };
    let rendered = presenter.render(&header, &plan)?;

    match &config.output {
        Some(path) => {
            write_to_file(path, &rendered).with_context(|| format!("writing plan to {path}"))?;
            tracing::info!(path = path.as_str(), "plan written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// One line per known race distance: label, name, and length.
fn render_distances() -> String {
    RaceDistance::ALL
        .iter()
        .map(|d| {
            format!(
                "{:<4} {:<14} {}\n",
                d.label(),
                d.display_name(),
                format_distance(d.km())
            )
        })
        .collect()
}

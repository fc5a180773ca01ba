//! PaceCalc: running pace and split calculator.

use pacecalc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        pacecalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}

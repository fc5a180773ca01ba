//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use pacecalc_core::{PaceError, RaceDistance, TargetTime};

/// PaceCalc: plan race paces and kilometer splits for a target time.
#[derive(Parser, Debug)]
#[command(name = "pacecalc", version, about)]
pub struct AppConfig {
    /// Target finish time as hh:mm:ss, mm:ss, or ss. Overrides the field flags.
    #[arg(short, long, env = "PACECALC_TIME")]
    pub time: Option<String>,

    /// Target hours. Non-numeric input counts as 0.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub hours: String,

    /// Target minutes. Non-numeric input counts as 0.
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub minutes: String,

    /// Target seconds. Non-numeric input counts as 0.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub seconds: String,

    /// Race distance: 5K, 10K, 21K (half), or 42K (marathon).
    #[arg(short, long, default_value = "5K", env = "PACECALC_DISTANCE")]
    pub distance: String,

    /// Custom distance in kilometers. Overrides --distance.
    #[arg(long, allow_hyphen_values = true)]
    pub km: Option<f64>,

    /// Only show one strategy: even, negative, positive, or conservative.
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (one line per strategy: name and pace).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// List the known race distances and exit.
    #[arg(long)]
    pub list_distances: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Output format for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// The distance a plan is computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSelection {
    pub label: String,
    pub km: f64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the target time.
    ///
    /// `--time` is parsed strictly; the field flags are parsed leniently.
    pub fn target_time(&self) -> Result<TargetTime, PaceError> {
        match &self.time {
            Some(time) => time.parse(),
            None => Ok(TargetTime::from_fields(
                &self.hours,
                &self.minutes,
                &self.seconds,
            )),
        }
    }

    /// Resolve the distance.
    pub fn distance_selection(&self) -> Result<DistanceSelection, PaceError> {
        if let Some(km) = self.km {
            return Ok(DistanceSelection {
                label: format!("{km} km"),
                km,
            });
        }
        let race: RaceDistance = self.distance.parse()?;
        Ok(DistanceSelection {
            label: race.display_name().to_string(),
            km: race.km(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::{CommandFactory, FromArgMatches};

    /// Parse `args` with the environment fallbacks detached, so the
    /// caller's `PACECALC_*` variables cannot leak into the result.
    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["pacecalc"];
        argv.extend_from_slice(args);
        let matches = AppConfig::command()
            .mut_arg("time", |a| a.env(None::<&'static str>))
            .mut_arg("distance", |a| a.env(None::<&'static str>))
            .try_get_matches_from(argv)
            .unwrap();
        AppConfig::from_arg_matches(&matches).unwrap()
    }

    #[test]
    fn defaults_match_thirty_minute_5k() {
        let config = parse(&[]);
        assert!(config.time.is_none());
        assert_eq!(config.target_time().unwrap().total_seconds(), 1800);
        assert_eq!(config.distance_selection().unwrap().label, "5K");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn time_flag_wins_over_fields() {
        let config = parse(&["--time", "1:45:00", "--minutes", "10"]);
        assert_eq!(config.target_time().unwrap().total_seconds(), 6300);
    }

    #[test]
    fn fields_are_lenient() {
        let config = parse(&["--hours", "abc", "--minutes", "-5", "--seconds", "42x"]);
        assert!(config.time.is_none());
        assert_eq!(config.target_time().unwrap().total_seconds(), 42);
    }

    #[test]
    fn strict_time_rejects_garbage() {
        let config = parse(&["--time", "soon"]);
        assert!(matches!(
            config.target_time(),
            Err(PaceError::InvalidTime(_))
        ));
    }

    #[test]
    fn named_distance() {
        let config = parse(&["--distance", "marathon"]);
        let selection = config.distance_selection().unwrap();
        assert_eq!(selection.label, "Marathon");
        assert!((selection.km - 42.195).abs() < f64::EPSILON);
    }

    #[test]
    fn custom_km_overrides_name() {
        let config = parse(&["--distance", "bogus", "--km", "7.5"]);
        let selection = config.distance_selection().unwrap();
        assert_eq!(selection.label, "7.5 km");
        assert!((selection.km - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_distance() {
        let config = parse(&["--distance", "15K"]);
        assert!(matches!(
            config.distance_selection(),
            Err(PaceError::UnknownDistance(_))
        ));
    }

    #[test]
    fn json_format() {
        let config = parse(&["--format", "json"]);
        assert_eq!(config.format, OutputFormat::Json);
    }
}

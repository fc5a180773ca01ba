//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// A styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// A strategy title line: name on the left, pace on the right.
#[must_use]
pub fn strategy_title(name: &str, pace: &str) -> String {
    let line = format!("{name:<40} {pace:>6} per km");
    if is_color_disabled() {
        line
    } else {
        style(line).bold().yellow().to_string()
    }
}

/// Dimmed secondary text.
#[must_use]
pub fn muted(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

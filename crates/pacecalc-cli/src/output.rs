//! CLI output formatting.

use std::io::{self, Write};

use pacecalc_core::Split;

/// Number of split cells per row in text output.
pub const SPLITS_PER_ROW: usize = 5;

/// Format a distance in kilometers, dropping a trailing `.0`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    format!("{km} km")
}

/// Format an animation speed multiplier with one decimal.
#[must_use]
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.1}x")
}

/// Lay out splits as a grid, `SPLITS_PER_ROW` cells per line.
#[must_use]
pub fn format_split_grid(splits: &[Split], indent: &str) -> String {
    splits
        .chunks(SPLITS_PER_ROW)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|s| format!("KM {:>2}  {}", s.km, s.time))
                .collect();
            format!("{indent}{}", cells.join("   "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(km: u32, time: &str) -> Split {
        Split {
            km,
            time: time.to_string(),
        }
    }

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(5.0), "5 km");
        assert_eq!(format_distance(21.097), "21.097 km");
    }

    #[test]
    fn speed_formatting() {
        assert_eq!(format_speed(500.0 / 300.0), "1.7x");
        assert_eq!(format_speed(5.0), "5.0x");
    }

    #[test]
    fn grid_wraps_after_five() {
        let splits: Vec<Split> = (1..=7).map(|km| split(km, "00:05:00")).collect();
        let grid = format_split_grid(&splits, "  ");
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  KM  1  00:05:00"));
        assert!(lines[1].contains("KM  7  00:05:00"));
    }

    #[test]
    fn grid_empty() {
        assert_eq!(format_split_grid(&[], ""), "");
    }

    #[test]
    fn write_file_appends_newline() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("plan.txt");
        write_to_file(path.to_str().unwrap(), "Even Pace 5:00").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Even Pace 5:00\n");
    }
}

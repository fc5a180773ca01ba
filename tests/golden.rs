//! Golden file integration tests.
//!
//! Reads tests/testdata/splits_golden.json and checks every strategy's pace
//! and split list for a set of race distances and target times.

use serde::Deserialize;

use pacecalc_core::{generate_strategies, RaceDistance};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    distance: RaceDistance,
    total_seconds: u64,
    strategies: Vec<GoldenStrategy>,
}

#[derive(Deserialize)]
struct GoldenStrategy {
    name: String,
    pace: String,
    splits: Vec<String>,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/splits_golden.json")
        .or_else(|_| std::fs::read_to_string("../../tests/testdata/splits_golden.json"))
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_not_empty() {
    let golden = load_golden();
    assert!(!golden.cases.is_empty());
    for case in &golden.cases {
        assert_eq!(case.strategies.len(), 4);
    }
}

#[test]
fn golden_paces() {
    for case in load_golden().cases {
        let actual = generate_strategies(case.total_seconds, case.distance.km());
        assert_eq!(actual.len(), case.strategies.len());
        for (got, want) in actual.iter().zip(&case.strategies) {
            assert_eq!(got.name, want.name);
            assert_eq!(
                got.pace, want.pace,
                "{} {} in {}s",
                want.name, case.distance, case.total_seconds
            );
        }
    }
}

#[test]
fn golden_splits() {
    for case in load_golden().cases {
        let actual = generate_strategies(case.total_seconds, case.distance.km());
        for (got, want) in actual.iter().zip(&case.strategies) {
            let times: Vec<&str> = got.splits.iter().map(|s| s.time.as_str()).collect();
            assert_eq!(
                times, want.splits,
                "{} {} in {}s",
                want.name, case.distance, case.total_seconds
            );
            let kms: Vec<u32> = got.splits.iter().map(|s| s.km).collect();
            let expected: Vec<u32> = (1..=u32::try_from(want.splits.len()).unwrap()).collect();
            assert_eq!(kms, expected);
        }
    }
}

#[test]
fn golden_split_counts_follow_floor() {
    for case in load_golden().cases {
        let expected = match case.distance {
            RaceDistance::FiveK => 5,
            RaceDistance::TenK => 10,
            RaceDistance::HalfMarathon => 21,
            RaceDistance::Marathon => 42,
        };
        for s in &case.strategies {
            assert_eq!(s.splits.len(), expected);
        }
    }
}

//! Named race distances.

use serde::{Deserialize, Serialize};

use crate::calculator::PaceError;

/// A standard road race distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceDistance {
    #[serde(rename = "5K")]
    FiveK,
    #[serde(rename = "10K")]
    TenK,
    #[serde(rename = "21K")]
    HalfMarathon,
    #[serde(rename = "42K")]
    Marathon,
}

impl RaceDistance {
    /// All distances, shortest first.
    pub const ALL: [RaceDistance; 4] = [
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::HalfMarathon,
        RaceDistance::Marathon,
    ];

    /// Length in kilometers.
    #[must_use]
    pub fn km(self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::HalfMarathon => 21.097,
            Self::Marathon => 42.195,
        }
    }

    /// Short label, e.g. `21K`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "21K",
            Self::Marathon => "42K",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

impl std::str::FromStr for RaceDistance {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "21k" | "half" | "half-marathon" => Ok(Self::HalfMarathon),
            "42k" | "marathon" | "full" => Ok(Self::Marathon),
            _ => Err(PaceError::UnknownDistance(s.to_string())),
        }
    }
}

impl std::fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

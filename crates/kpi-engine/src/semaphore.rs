//! # Semaphore — Three-State Traffic-Light Classification
//!
//! The ordinal outcome of classifying a measured result against a
//! threshold band. `Red < Yellow < Green`: a worse state compares less
//! than a better one, so `max` picks the healthier of two readings and
//! sorting ascending puts the worst first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::EngineError;

/// Traffic-light classification of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semaphore {
    /// Result at or beyond the green threshold. On track.
    Green,
    /// Result between the yellow and green thresholds. Needs attention.
    Yellow,
    /// Result short of the yellow threshold. Off track.
    Red,
}

impl Semaphore {
    /// Returns all semaphore states, best first.
    pub fn all() -> &'static [Semaphore] {
        &[Self::Green, Self::Yellow, Self::Red]
    }

    /// Position in the ordinal scale. Higher is healthier.
    fn ordering(&self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// The severity token UI layers key styling off, mirroring the
    /// dashboard convention: green renders as a success badge, yellow as a
    /// warning, red as critical.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Green => "success",
            Self::Yellow => "warning",
            Self::Red => "critical",
        }
    }

    /// The hex color used for chart fills and badges.
    pub fn hex_color(&self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Yellow => "#f59e0b",
            Self::Red => "#b91c1c",
        }
    }

    /// Returns the snake_case string identifier for this state.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl PartialOrd for Semaphore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Semaphore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering().cmp(&other.ordering())
    }
}

impl std::fmt::Display for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semaphore {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            other => Err(EngineError::UnknownSemaphore {
                value: other.to_string(),
            }),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

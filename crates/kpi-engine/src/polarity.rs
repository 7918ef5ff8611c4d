//! # Polarity — Which Direction Is Better
//!
//! Whether an indicator improves as its result grows (direct) or shrinks
//! (inverse). Polarity is declared per indicator and stored with its
//! threshold band; it is never derived from measurement data.
//!
//! The optional `infer-polarity` feature restores the historical fallback
//! that read polarity out of the threshold ordering (`green < yellow`
//! implies inverse). It exists only to ingest catalogs that predate the
//! explicit field.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Improvement direction of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Higher results are better: coverage, satisfaction, revenue.
    Direct,
    /// Lower results are better: defects, response time, complaints.
    Inverse,
}

impl Polarity {
    /// Returns both polarities.
    pub fn all() -> &'static [Polarity] {
        &[Self::Direct, Self::Inverse]
    }

    /// Returns the snake_case string identifier for this polarity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Inverse => "inverse",
        }
    }

    /// Derive polarity from threshold ordering, the legacy convention for
    /// catalogs without an explicit polarity field.
    ///
    /// `green < yellow` reads as an inverse indicator (a lower bar is the
    /// better zone); anything else reads as direct. Ambiguous orderings
    /// (equal or non-finite thresholds) fall back to direct with a warning,
    /// matching how historical data was interpreted.
    #[cfg(feature = "infer-polarity")]
    pub fn infer(green_threshold: f64, yellow_threshold: f64) -> Polarity {
        if !green_threshold.is_finite() || !yellow_threshold.is_finite() {
            tracing::warn!(
                green = green_threshold,
                yellow = yellow_threshold,
                "non-finite thresholds; falling back to direct polarity"
            );
            return Polarity::Direct;
        }
        if green_threshold == yellow_threshold {
            tracing::warn!(
                green = green_threshold,
                yellow = yellow_threshold,
                "equal thresholds are ambiguous; falling back to direct polarity"
            );
            return Polarity::Direct;
        }
        if green_threshold < yellow_threshold {
            Polarity::Inverse
        } else {
            Polarity::Direct
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "inverse" => Ok(Self::Inverse),
            other => Err(EngineError::UnknownPolarity {
                value: other.to_string(),
            }),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

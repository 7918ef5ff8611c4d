//! Error types for threshold construction and string parsing.

use thiserror::Error;

use crate::polarity::Polarity;

/// Errors raised by the evaluation engine.
///
/// All variants are construction-time or parse-time failures. Evaluation
/// itself is total and never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Green and yellow thresholds coincide, so the band cannot separate
    /// the three semaphore zones.
    #[error("green and yellow thresholds are both {value}; a band needs distinct thresholds")]
    EqualThresholds {
        /// The shared threshold value.
        value: f64,
    },

    /// The declared polarity disagrees with the threshold ordering.
    #[error(
        "polarity {polarity} disagrees with threshold ordering (green {green}, yellow {yellow})"
    )]
    PolarityMismatch {
        /// The declared polarity.
        polarity: Polarity,
        /// The green threshold.
        green: f64,
        /// The yellow threshold.
        yellow: f64,
    },

    /// A threshold was NaN or infinite.
    #[error("{field} threshold must be finite, got {value}")]
    NonFiniteThreshold {
        /// Which threshold was rejected ("green" or "yellow").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A string did not name a semaphore state.
    #[error("unknown semaphore: {value:?}")]
    UnknownSemaphore {
        /// The rejected input.
        value: String,
    },

    /// A string did not name a polarity.
    #[error("unknown polarity: {value:?}")]
    UnknownPolarity {
        /// The rejected input.
        value: String,
    },
}

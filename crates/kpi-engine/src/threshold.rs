//! # Threshold Bands — Validated Classification Boundaries
//!
//! A [`ThresholdBand`] packages the green and yellow thresholds of an
//! indicator together with its declared [`Polarity`], validated so that
//! downstream classification never meets a contradictory or non-finite
//! configuration.
//!
//! ## Invariants
//!
//! For a band to construct:
//!
//! - both thresholds are finite,
//! - the thresholds differ (equal thresholds cannot separate three zones),
//! - the ordering agrees with the polarity: direct bands place green above
//!   yellow, inverse bands place green below yellow.

use crate::error::EngineError;
use crate::evaluate::{self, Evaluation};
use crate::polarity::Polarity;
use crate::semaphore::Semaphore;

/// A validated pair of classification thresholds and their polarity.
///
/// The green threshold bounds the healthy zone and the yellow threshold
/// bounds the warning zone; which side of each bound is "inside" depends
/// on the polarity. Construction enforces the invariants, so holding a
/// `ThresholdBand` is proof the configuration is coherent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    green: f64,
    yellow: f64,
    polarity: Polarity,
}

impl ThresholdBand {
    /// Build a band, validating finiteness, distinctness, and agreement
    /// between threshold ordering and declared polarity.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NonFiniteThreshold`] if either threshold is NaN or
    ///   infinite.
    /// - [`EngineError::EqualThresholds`] if the thresholds coincide.
    /// - [`EngineError::PolarityMismatch`] if a direct band places green
    ///   below yellow, or an inverse band places green above yellow.
    pub fn new(green: f64, yellow: f64, polarity: Polarity) -> Result<Self, EngineError> {
        if !green.is_finite() {
            return Err(EngineError::NonFiniteThreshold {
                field: "green",
                value: green,
            });
        }
        if !yellow.is_finite() {
            return Err(EngineError::NonFiniteThreshold {
                field: "yellow",
                value: yellow,
            });
        }
        if green == yellow {
            return Err(EngineError::EqualThresholds { value: green });
        }
        let ordering_agrees = match polarity {
            Polarity::Direct => green > yellow,
            Polarity::Inverse => green < yellow,
        };
        if !ordering_agrees {
            return Err(EngineError::PolarityMismatch {
                polarity,
                green,
                yellow,
            });
        }
        Ok(Self {
            green,
            yellow,
            polarity,
        })
    }

    /// Build a band from bare thresholds, deriving polarity from their
    /// ordering. Legacy ingestion only; ambiguous orderings are rejected
    /// rather than guessed, unlike [`Polarity::infer`] which must stay
    /// total for raw evaluation calls.
    #[cfg(feature = "infer-polarity")]
    pub fn from_inferred(green: f64, yellow: f64) -> Result<Self, EngineError> {
        Self::new(green, yellow, Polarity::infer(green, yellow))
    }

    /// The boundary of the healthy zone.
    pub fn green(&self) -> f64 {
        self.green
    }

    /// The boundary of the warning zone.
    pub fn yellow(&self) -> f64 {
        self.yellow
    }

    /// The declared improvement direction.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Classify a raw result against this band. See [`evaluate::classify`].
    pub fn classify(&self, result: f64) -> Semaphore {
        evaluate::classify(result, self)
    }

    /// Run the full evaluation of a result against this band and a target:
    /// compliance percentage, semaphore, and target check in one pass.
    pub fn evaluate(&self, result: f64, target: f64) -> Evaluation {
        Evaluation {
            percentage: evaluate::compliance_percentage(result, target, self.polarity),
            semaphore: evaluate::classify(result, self),
            meets_target: evaluate::meets_target(result, target, self.polarity),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_band_constructs() {
        let band = ThresholdBand::new(90.0, 70.0, Polarity::Direct).unwrap();
        assert_eq!(band.green(), 90.0);
        assert_eq!(band.yellow(), 70.0);
        assert_eq!(band.polarity(), Polarity::Direct);
    }

    #[test]
    fn test_inverse_band_constructs() {
        let band = ThresholdBand::new(5.0, 10.0, Polarity::Inverse).unwrap();
        assert_eq!(band.polarity(), Polarity::Inverse);
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let err = ThresholdBand::new(50.0, 50.0, Polarity::Direct).unwrap_err();
        assert_eq!(err, EngineError::EqualThresholds { value: 50.0 });
    }

    #[test]
    fn test_polarity_mismatch_rejected() {
        // Direct polarity but green below yellow.
        assert!(matches!(
            ThresholdBand::new(70.0, 90.0, Polarity::Direct),
            Err(EngineError::PolarityMismatch { .. })
        ));
        // Inverse polarity but green above yellow.
        assert!(matches!(
            ThresholdBand::new(10.0, 5.0, Polarity::Inverse),
            Err(EngineError::PolarityMismatch { .. })
        ));
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        assert!(matches!(
            ThresholdBand::new(f64::NAN, 70.0, Polarity::Direct),
            Err(EngineError::NonFiniteThreshold { field: "green", .. })
        ));
        assert!(matches!(
            ThresholdBand::new(90.0, f64::NEG_INFINITY, Polarity::Direct),
            Err(EngineError::NonFiniteThreshold { field: "yellow", .. })
        ));
    }

    #[test]
    fn test_negative_thresholds_allowed() {
        // Bands over negative scales are legitimate (e.g. budget variance).
        let band = ThresholdBand::new(-5.0, -10.0, Polarity::Direct).unwrap();
        assert_eq!(band.classify(-3.0), Semaphore::Green);
        assert_eq!(band.classify(-7.0), Semaphore::Yellow);
        assert_eq!(band.classify(-20.0), Semaphore::Red);
    }

    #[test]
    fn test_evaluate_composes_all_three_outputs() {
        let band = ThresholdBand::new(90.0, 70.0, Polarity::Direct).unwrap();
        let eval = band.evaluate(95.0, 100.0);
        assert_eq!(eval.percentage, 95.0);
        assert_eq!(eval.semaphore, Semaphore::Green);
        assert!(!eval.meets_target, "95 is short of a target of 100");
    }

    #[cfg(feature = "infer-polarity")]
    #[test]
    fn test_from_inferred_derives_polarity() {
        let direct = ThresholdBand::from_inferred(90.0, 70.0).unwrap();
        assert_eq!(direct.polarity(), Polarity::Direct);
        let inverse = ThresholdBand::from_inferred(5.0, 10.0).unwrap();
        assert_eq!(inverse.polarity(), Polarity::Inverse);
        // Equal thresholds infer direct, which new() then rejects.
        assert!(ThresholdBand::from_inferred(50.0, 50.0).is_err());
    }
}

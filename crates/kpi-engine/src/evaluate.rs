//! # Evaluation — Compliance Percentage, Classification, Target Check
//!
//! The pure functions at the center of the engine. All of them are total
//! over `f64`: NaN and infinite inputs produce the pessimistic outcome
//! (zero percentage, red semaphore, failed target check) rather than a
//! panic or a spurious success.
//!
//! ## Two spaces, one classification
//!
//! The compliance percentage and the semaphore live in different spaces.
//! The percentage normalizes result-vs-target into `0..=100` for
//! aggregation and display. The semaphore classifies the **raw result**
//! against the raw thresholds. Classifying in percentage space instead
//! would collapse every inverse result at or under its target to 100 and
//! erase the green/yellow distinction the thresholds encode; an inverse
//! indicator at target 5 with thresholds 5/10 must read green at 3 and
//! yellow at 8; the raw-space rule preserves exactly that distinction.

use serde::{Deserialize, Serialize};

use crate::polarity::Polarity;
use crate::semaphore::Semaphore;
use crate::threshold::ThresholdBand;

// ─── Core Functions ──────────────────────────────────────────────────

/// Clamp a percentage into `0..=100`. Non-finite values clamp to `0`,
/// so arithmetic garbage (division overflow, NaN propagation) never
/// reads as compliance.
pub fn clamp_percentage(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0).min(100.0)
}

/// Compliance percentage of a result against its target, in `0..=100`.
///
/// - **Zero target** is a binary goal: the percentage is 100 if the
///   result is exactly zero, otherwise 0. (A "zero incidents" indicator
///   either held or it did not; a ratio against zero is meaningless.)
/// - **Direct** polarity scores `result / target`, clamped.
/// - **Inverse** polarity scores 100 for any result at or under target,
///   and `target / result` (clamped) beyond it, so overshoot decays
///   smoothly instead of dropping off a cliff.
pub fn compliance_percentage(result: f64, target: f64, polarity: Polarity) -> f64 {
    if target == 0.0 {
        return if result == 0.0 { 100.0 } else { 0.0 };
    }
    match polarity {
        Polarity::Direct => clamp_percentage(result / target * 100.0),
        Polarity::Inverse => {
            if result <= target {
                100.0
            } else {
                clamp_percentage(target / result * 100.0)
            }
        }
    }
}

/// Classify a raw result against a threshold band.
///
/// Boundaries are inclusive toward the better state: a result exactly on
/// the green threshold is green, exactly on the yellow threshold is
/// yellow. NaN results compare false against every threshold and land on
/// red.
pub fn classify(result: f64, band: &ThresholdBand) -> Semaphore {
    classify_with(result, band.green(), band.yellow(), band.polarity())
}

pub(crate) fn classify_with(result: f64, green: f64, yellow: f64, polarity: Polarity) -> Semaphore {
    match polarity {
        Polarity::Direct => {
            if result >= green {
                Semaphore::Green
            } else if result >= yellow {
                Semaphore::Yellow
            } else {
                Semaphore::Red
            }
        }
        Polarity::Inverse => {
            if result <= green {
                Semaphore::Green
            } else if result <= yellow {
                Semaphore::Yellow
            } else {
                Semaphore::Red
            }
        }
    }
}

/// Whether a result meets its target, respecting polarity.
///
/// A zero target is a binary goal meet-able only by an exactly-zero
/// result. Otherwise direct indicators meet at or above target and
/// inverse indicators meet at or below it. NaN never meets anything.
pub fn meets_target(result: f64, target: f64, polarity: Polarity) -> bool {
    if target == 0.0 {
        return result == 0.0;
    }
    match polarity {
        Polarity::Direct => result >= target,
        Polarity::Inverse => result <= target,
    }
}

/// Render a percentage as a whole-number label, e.g. `95%`.
///
/// Rounds to the nearest integer with halves away from zero (`62.5%`
/// renders as `63%`). Non-finite input renders as `0%`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", value.round() as i64)
}

// ─── Evaluation ──────────────────────────────────────────────────────

/// The complete outcome of evaluating one measurement: produced once at
/// submission time by [`ThresholdBand::evaluate`] and stored with the
/// record, so later reporting never re-derives it under changed
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Compliance percentage in `0..=100`.
    pub percentage: f64,
    /// Traffic-light classification of the raw result.
    pub semaphore: Semaphore,
    /// Whether the result met the target.
    pub meets_target: bool,
}

// ─── Legacy Inference Wrappers ───────────────────────────────────────

/// [`compliance_percentage`] with polarity derived from threshold
/// ordering. Legacy ingestion only.
#[cfg(feature = "infer-polarity")]
pub fn compliance_percentage_inferred(
    result: f64,
    target: f64,
    green_threshold: f64,
    yellow_threshold: f64,
) -> f64 {
    let polarity = Polarity::infer(green_threshold, yellow_threshold);
    compliance_percentage(result, target, polarity)
}

/// [`classify`] with polarity derived from threshold ordering. Legacy
/// ingestion only.
#[cfg(feature = "infer-polarity")]
pub fn classify_inferred(result: f64, green_threshold: f64, yellow_threshold: f64) -> Semaphore {
    let polarity = Polarity::infer(green_threshold, yellow_threshold);
    classify_with(result, green_threshold, yellow_threshold, polarity)
}

/// [`meets_target`] with polarity derived from threshold ordering.
/// Legacy ingestion only.
#[cfg(feature = "infer-polarity")]
pub fn meets_target_inferred(
    result: f64,
    target: f64,
    green_threshold: f64,
    yellow_threshold: f64,
) -> bool {
    let polarity = Polarity::infer(green_threshold, yellow_threshold);
    meets_target(result, target, polarity)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn direct_band() -> ThresholdBand {
        ThresholdBand::new(90.0, 70.0, Polarity::Direct).unwrap()
    }

    fn inverse_band() -> ThresholdBand {
        ThresholdBand::new(5.0, 10.0, Polarity::Inverse).unwrap()
    }

    // ── Direct indicators ────────────────────────────────────────────

    #[test]
    fn test_direct_green_scenario() {
        // Target 100, thresholds 90/70, result 95.
        let pct = compliance_percentage(95.0, 100.0, Polarity::Direct);
        assert_eq!(pct, 95.0);
        assert_eq!(classify(95.0, &direct_band()), Semaphore::Green);
    }

    #[test]
    fn test_direct_yellow_scenario() {
        let pct = compliance_percentage(75.0, 100.0, Polarity::Direct);
        assert_eq!(pct, 75.0);
        assert_eq!(classify(75.0, &direct_band()), Semaphore::Yellow);
    }

    #[test]
    fn test_direct_red_scenario() {
        let pct = compliance_percentage(50.0, 100.0, Polarity::Direct);
        assert_eq!(pct, 50.0);
        assert_eq!(classify(50.0, &direct_band()), Semaphore::Red);
    }

    #[test]
    fn test_direct_boundaries_are_inclusive() {
        let band = direct_band();
        assert_eq!(classify(90.0, &band), Semaphore::Green);
        assert_eq!(classify(89.999, &band), Semaphore::Yellow);
        assert_eq!(classify(70.0, &band), Semaphore::Yellow);
        assert_eq!(classify(69.999, &band), Semaphore::Red);
    }

    #[test]
    fn test_direct_overachievement_clamps_to_100() {
        assert_eq!(compliance_percentage(150.0, 100.0, Polarity::Direct), 100.0);
    }

    #[test]
    fn test_direct_negative_result_clamps_to_0() {
        assert_eq!(compliance_percentage(-25.0, 100.0, Polarity::Direct), 0.0);
    }

    // ── Inverse indicators ───────────────────────────────────────────

    #[test]
    fn test_inverse_at_or_under_target_is_full_compliance() {
        // Target 5 complaints, thresholds 5/10, result 3.
        let pct = compliance_percentage(3.0, 5.0, Polarity::Inverse);
        assert_eq!(pct, 100.0);
        assert_eq!(classify(3.0, &inverse_band()), Semaphore::Green);
    }

    #[test]
    fn test_inverse_overshoot_decays() {
        // Result 8 against target 5: 5/8 = 62.5%.
        let pct = compliance_percentage(8.0, 5.0, Polarity::Inverse);
        assert_eq!(pct, 62.5);
        assert_eq!(classify(8.0, &inverse_band()), Semaphore::Yellow);
    }

    #[test]
    fn test_inverse_boundaries_are_inclusive() {
        let band = inverse_band();
        assert_eq!(classify(5.0, &band), Semaphore::Green);
        assert_eq!(classify(5.001, &band), Semaphore::Yellow);
        assert_eq!(classify(10.0, &band), Semaphore::Yellow);
        assert_eq!(classify(10.001, &band), Semaphore::Red);
    }

    #[test]
    fn test_inverse_far_overshoot_clamps_to_0() {
        // Division by a huge result shrinks toward 0 and stays in range.
        let pct = compliance_percentage(5_000_000.0, 5.0, Polarity::Inverse);
        assert!(pct > 0.0 && pct < 1.0, "tiny but positive, got {pct}");
        assert_eq!(compliance_percentage(f64::MAX, 5.0, Polarity::Inverse).floor(), 0.0);
    }

    #[test]
    fn test_inverse_result_zero_is_full_compliance() {
        assert_eq!(compliance_percentage(0.0, 5.0, Polarity::Inverse), 100.0);
    }

    // ── Zero targets ─────────────────────────────────────────────────

    #[test]
    fn test_zero_target_is_binary() {
        assert_eq!(compliance_percentage(0.0, 0.0, Polarity::Direct), 100.0);
        assert_eq!(compliance_percentage(1.0, 0.0, Polarity::Direct), 0.0);
        assert_eq!(compliance_percentage(0.0, 0.0, Polarity::Inverse), 100.0);
        assert_eq!(compliance_percentage(0.001, 0.0, Polarity::Inverse), 0.0);
    }

    #[test]
    fn test_zero_target_never_divides() {
        // No NaN or infinity can escape the zero-target branch.
        let pct = compliance_percentage(42.0, 0.0, Polarity::Direct);
        assert!(pct.is_finite());
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_zero_target_meets_only_exact_zero() {
        assert!(meets_target(0.0, 0.0, Polarity::Direct));
        assert!(meets_target(0.0, 0.0, Polarity::Inverse));
        assert!(!meets_target(0.5, 0.0, Polarity::Direct));
        assert!(!meets_target(-0.5, 0.0, Polarity::Inverse));
    }

    // ── Target checks ────────────────────────────────────────────────

    #[test]
    fn test_meets_target_direct() {
        assert!(meets_target(100.0, 100.0, Polarity::Direct));
        assert!(meets_target(101.0, 100.0, Polarity::Direct));
        assert!(!meets_target(99.999, 100.0, Polarity::Direct));
    }

    #[test]
    fn test_meets_target_inverse() {
        assert!(meets_target(5.0, 5.0, Polarity::Inverse));
        assert!(meets_target(2.0, 5.0, Polarity::Inverse));
        assert!(!meets_target(5.001, 5.0, Polarity::Inverse));
    }

    // ── Non-finite inputs ────────────────────────────────────────────

    #[test]
    fn test_nan_result_is_pessimistic_everywhere() {
        assert_eq!(compliance_percentage(f64::NAN, 100.0, Polarity::Direct), 0.0);
        assert_eq!(compliance_percentage(f64::NAN, 5.0, Polarity::Inverse), 0.0);
        assert_eq!(classify(f64::NAN, &direct_band()), Semaphore::Red);
        assert_eq!(classify(f64::NAN, &inverse_band()), Semaphore::Red);
        assert!(!meets_target(f64::NAN, 100.0, Polarity::Direct));
        assert!(!meets_target(f64::NAN, 5.0, Polarity::Inverse));
    }

    #[test]
    fn test_nan_target_yields_zero_not_nan() {
        assert_eq!(compliance_percentage(50.0, f64::NAN, Polarity::Direct), 0.0);
        assert!(!meets_target(50.0, f64::NAN, Polarity::Direct));
    }

    #[test]
    fn test_infinite_result_direct_clamps() {
        assert_eq!(compliance_percentage(f64::INFINITY, 100.0, Polarity::Direct), 100.0);
        assert_eq!(compliance_percentage(f64::NEG_INFINITY, 100.0, Polarity::Direct), 0.0);
    }

    #[test]
    fn test_clamp_percentage_bounds() {
        assert_eq!(clamp_percentage(-3.0), 0.0);
        assert_eq!(clamp_percentage(0.0), 0.0);
        assert_eq!(clamp_percentage(55.5), 55.5);
        assert_eq!(clamp_percentage(100.0), 100.0);
        assert_eq!(clamp_percentage(180.0), 100.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(f64::INFINITY), 0.0);
    }

    // ── Percentage formatting ────────────────────────────────────────

    #[test]
    fn test_format_percent_whole_numbers() {
        assert_eq!(format_percent(95.0), "95%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn test_format_percent_rounds_half_away_from_zero() {
        assert_eq!(format_percent(94.5), "95%");
        assert_eq!(format_percent(94.49), "94%");
        assert_eq!(format_percent(62.5), "63%");
        assert_eq!(format_percent(0.5), "1%");
        assert_eq!(format_percent(0.49), "0%");
    }

    #[test]
    fn test_format_percent_non_finite_is_zero() {
        assert_eq!(format_percent(f64::NAN), "0%");
        assert_eq!(format_percent(f64::INFINITY), "0%");
        assert_eq!(format_percent(f64::NEG_INFINITY), "0%");
    }

    #[test]
    fn test_format_percent_negative_zero_has_no_sign() {
        assert_eq!(format_percent(-0.2), "0%");
    }

    // ── Evaluation serde ─────────────────────────────────────────────

    #[test]
    fn test_evaluation_serde_roundtrip() {
        let eval = Evaluation {
            percentage: 62.5,
            semaphore: Semaphore::Yellow,
            meets_target: false,
        };
        let json = serde_json::to_string(&eval).unwrap();
        assert!(json.contains("\"yellow\""));
        let back: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, eval);
    }

    // ── Legacy inference wrappers ────────────────────────────────────

    #[cfg(feature = "infer-polarity")]
    #[test]
    fn test_inferred_wrappers_match_explicit_calls() {
        // Direct ordering: green 90 above yellow 70.
        assert_eq!(
            compliance_percentage_inferred(95.0, 100.0, 90.0, 70.0),
            compliance_percentage(95.0, 100.0, Polarity::Direct)
        );
        assert_eq!(classify_inferred(75.0, 90.0, 70.0), Semaphore::Yellow);
        assert!(meets_target_inferred(100.0, 100.0, 90.0, 70.0));

        // Inverse ordering: green 5 below yellow 10.
        assert_eq!(compliance_percentage_inferred(8.0, 5.0, 5.0, 10.0), 62.5);
        assert_eq!(classify_inferred(3.0, 5.0, 10.0), Semaphore::Green);
        assert!(!meets_target_inferred(8.0, 5.0, 5.0, 10.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_float() -> impl Strategy<Value = f64> {
        prop_oneof![
            -1.0e9..1.0e9f64,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(0.0),
            Just(-0.0),
        ]
    }

    proptest! {
        #[test]
        fn test_percentage_always_in_range(
            result in any_float(),
            target in any_float(),
        ) {
            for polarity in [Polarity::Direct, Polarity::Inverse] {
                let pct = compliance_percentage(result, target, polarity);
                prop_assert!((0.0..=100.0).contains(&pct), "out of range: {pct}");
            }
        }

        #[test]
        fn test_classify_is_total(result in any_float()) {
            let direct = ThresholdBand::new(90.0, 70.0, Polarity::Direct).unwrap();
            let inverse = ThresholdBand::new(5.0, 10.0, Polarity::Inverse).unwrap();
            // Must return without panicking for every input.
            let _ = classify(result, &direct);
            let _ = classify(result, &inverse);
        }

        #[test]
        fn test_direct_percentage_monotone_in_result(
            target in 0.1..1.0e6f64,
            a in -1.0e6..1.0e6f64,
            b in -1.0e6..1.0e6f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compliance_percentage(lo, target, Polarity::Direct);
            let p_hi = compliance_percentage(hi, target, Polarity::Direct);
            prop_assert!(p_lo <= p_hi, "direct percentage must not decrease as the result grows");
        }

        #[test]
        fn test_inverse_percentage_antitone_in_result(
            target in 0.1..1.0e6f64,
            a in -1.0e6..1.0e6f64,
            b in -1.0e6..1.0e6f64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compliance_percentage(lo, target, Polarity::Inverse);
            let p_hi = compliance_percentage(hi, target, Polarity::Inverse);
            prop_assert!(p_lo >= p_hi, "inverse percentage must not increase as the result grows");
        }

        #[test]
        fn test_meeting_target_implies_full_inverse_percentage(
            target in 0.1..1.0e6f64,
            result in -1.0e6..1.0e6f64,
        ) {
            if meets_target(result, target, Polarity::Inverse) {
                prop_assert_eq!(compliance_percentage(result, target, Polarity::Inverse), 100.0);
            }
        }

        #[test]
        fn test_format_percent_shape(value in any_float()) {
            let rendered = format_percent(value);
            prop_assert!(rendered.ends_with('%'));
            let digits = &rendered[..rendered.len() - 1];
            prop_assert!(digits.parse::<i64>().is_ok(), "not an integer label: {rendered}");
        }

        #[test]
        fn test_classification_agrees_with_band_method(result in any_float()) {
            let band = ThresholdBand::new(90.0, 70.0, Polarity::Direct).unwrap();
            prop_assert_eq!(classify(result, &band), band.classify(result));
        }
    }
}

//! Performance indicator definitions.

use serde::{Deserialize, Serialize};

use kpi_core::{Frequency, IndicatorCode, IndicatorId, IndicatorKind, IndicatorStatus, ProcessId};
use kpi_engine::{EngineError, Polarity, ThresholdBand};

/// A performance indicator: one measured quantity belonging to a process.
///
/// Thresholds are stored as the raw `green_threshold` / `yellow_threshold`
/// pair exactly as catalog authors write them, alongside the explicit
/// [`Polarity`]. They are only promoted to a validated [`ThresholdBand`]
/// on demand, so catalog validation can report incoherent bands as
/// ordinary violations instead of failing the whole file at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Storage identity.
    pub id: IndicatorId,
    /// Short human-assigned label; its prefix names the owning process.
    pub code: IndicatorCode,
    /// Full display name.
    pub name: String,
    /// The process this indicator belongs to.
    pub process_id: ProcessId,
    /// Which performance dimension this indicator measures.
    pub kind: IndicatorKind,
    /// What the indicator captures and why it matters.
    #[serde(default)]
    pub description: Option<String>,
    /// How the result is computed, as prose or a formula sketch.
    #[serde(default)]
    pub formula: Option<String>,
    /// The goal the result is measured against.
    pub target: f64,
    /// Unit of the result and target, e.g. `%`, `days`, `count`.
    pub unit: String,
    /// Reporting cadence.
    pub frequency: Frequency,
    /// Where the raw data comes from.
    #[serde(default)]
    pub source: Option<String>,
    /// Whether the indicator currently accepts measurements.
    pub status: IndicatorStatus,
    /// Improvement direction. Declared, never inferred.
    pub polarity: Polarity,
    /// Boundary of the green (healthy) zone.
    pub green_threshold: f64,
    /// Boundary of the yellow (warning) zone.
    pub yellow_threshold: f64,
}

impl Indicator {
    /// Promote the stored thresholds to a validated [`ThresholdBand`].
    ///
    /// # Errors
    ///
    /// Returns the underlying [`EngineError`] when the stored thresholds
    /// are non-finite, equal, or ordered against the declared polarity.
    pub fn threshold_band(&self) -> Result<ThresholdBand, EngineError> {
        ThresholdBand::new(self.green_threshold, self.yellow_threshold, self.polarity)
    }

    /// Whether the indicator currently accepts measurements.
    pub fn is_active(&self) -> bool {
        self.status == IndicatorStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpi_engine::Semaphore;

    fn sample_yaml() -> &'static str {
        r#"
id: 7a2d8c30-55f1-4f3e-9f0a-64de0a1b2c3d
code: GF-01
name: Budget Execution
process_id: 1f0f9c3a-76a4-4a52-a7d0-3f5b2a27e9b1
kind: efficiency
description: Share of the annual budget executed on schedule.
target: 100
unit: "%"
frequency: quarterly
status: active
polarity: direct
green_threshold: 90
yellow_threshold: 70
"#
    }

    #[test]
    fn test_yaml_deserializes_and_band_validates() {
        let indicator: Indicator = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(indicator.code.as_str(), "GF-01");
        assert!(indicator.is_active());
        assert!(indicator.formula.is_none());

        let band = indicator.threshold_band().unwrap();
        assert_eq!(band.polarity(), Polarity::Direct);
        assert_eq!(band.classify(95.0), Semaphore::Green);
    }

    #[test]
    fn test_incoherent_band_parses_but_fails_promotion() {
        // Polarity says direct but the ordering says inverse. The file
        // still parses; the band refuses.
        let yaml = sample_yaml().replace("green_threshold: 90", "green_threshold: 60");
        let indicator: Indicator = serde_yaml::from_str(&yaml).unwrap();
        assert!(matches!(
            indicator.threshold_band(),
            Err(EngineError::PolarityMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_polarity_is_rejected() {
        let yaml = sample_yaml().replace("polarity: direct\n", "");
        assert!(serde_yaml::from_str::<Indicator>(&yaml).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let indicator: Indicator = serde_yaml::from_str(sample_yaml()).unwrap();
        let json = serde_json::to_string(&indicator).unwrap();
        let back: Indicator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, indicator);
    }
}

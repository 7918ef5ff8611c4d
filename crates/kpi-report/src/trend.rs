//! # Trend Series — One Indicator Over Time
//!
//! A [`TrendSeries`] lines up an indicator's measurement records in
//! chronological order, one [`TrendPoint`] per reported period, so the
//! dashboard can chart the result against its target and its semaphore
//! history.

use serde::Serialize;

use kpi_core::{IndicatorId, Period};
use kpi_engine::Semaphore;
use kpi_records::MeasurementRecord;

// ─── Trend Point ─────────────────────────────────────────────────────

/// One period's measurement, projected for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    /// The period measured.
    pub period: Period,
    /// The raw measured result.
    pub result: f64,
    /// The target in force when the record was evaluated.
    pub target: f64,
    /// The stored compliance percentage.
    pub percentage: f64,
    /// The stored semaphore classification.
    pub semaphore: Semaphore,
    /// Whether the result met the target.
    pub meets_target: bool,
}

impl TrendPoint {
    fn from_record(record: &MeasurementRecord) -> Self {
        Self {
            period: record.period,
            result: record.result,
            target: record.target,
            percentage: record.percentage,
            semaphore: record.semaphore,
            meets_target: record.meets_target,
        }
    }
}

// ─── Trend Series ────────────────────────────────────────────────────

/// An indicator's measurement history, oldest period first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// The indicator charted.
    pub indicator_id: IndicatorId,
    /// Points in chronological order.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// Collect an indicator's records into a chronological series.
    ///
    /// Records belonging to other indicators are ignored, so callers can
    /// pass the full record store.
    pub fn build(indicator_id: IndicatorId, records: &[MeasurementRecord]) -> Self {
        let mut points: Vec<TrendPoint> = records
            .iter()
            .filter(|r| r.indicator_id == indicator_id)
            .map(TrendPoint::from_record)
            .collect();
        points.sort_by_key(|p| p.period);
        Self {
            indicator_id,
            points,
        }
    }

    /// The most recent point, if the indicator has reported at all.
    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.last()
    }

    /// Number of reported periods.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the indicator has no reported periods.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

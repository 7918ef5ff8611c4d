//! # Scorecards — Per-Process and Organization-Wide Aggregation
//!
//! A [`ProcessScorecard`] condenses one process's records for one period:
//! how many indicators reported, the mean stored compliance percentage,
//! the semaphore distribution, and an overall status light derived from
//! the share of indicators that met their target. The [`OrgSummary`]
//! rolls those up across every process in the catalog for the latest (or
//! a requested) period.
//!
//! ## Status rule
//!
//! A process with every reported indicator meeting target shows green;
//! at least half, yellow; fewer, red. A process with no records for the
//! period has no status at all, which renders as "no data" rather than a
//! misleading red.

use serde::Serialize;

use kpi_catalog::{Catalog, Process};
use kpi_core::{Period, ProcessCode, ProcessId};
use kpi_engine::Semaphore;
use kpi_records::MeasurementRecord;

// ─── Semaphore Distribution ──────────────────────────────────────────

/// Counts of records per semaphore state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SemaphoreDistribution {
    /// Records classified green.
    pub green: usize,
    /// Records classified yellow.
    pub yellow: usize,
    /// Records classified red.
    pub red: usize,
}

impl SemaphoreDistribution {
    /// Total records counted.
    pub fn total(&self) -> usize {
        self.green + self.yellow + self.red
    }

    fn count(&mut self, semaphore: Semaphore) {
        match semaphore {
            Semaphore::Green => self.green += 1,
            Semaphore::Yellow => self.yellow += 1,
            Semaphore::Red => self.red += 1,
        }
    }
}

// ─── Process Scorecard ───────────────────────────────────────────────

/// One process's aggregated performance for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessScorecard {
    /// The process being summarized.
    pub process_id: ProcessId,
    /// Its short code, for display.
    pub process_code: ProcessCode,
    /// Its full name, for display.
    pub process_name: String,
    /// How many records the process reported in the period.
    pub record_count: usize,
    /// Mean of the stored compliance percentages. Zero when no records.
    pub mean_percentage: f64,
    /// How many records met their target.
    pub meeting_target: usize,
    /// Records per semaphore state.
    pub distribution: SemaphoreDistribution,
    /// Overall status light. `None` when the process has no records for
    /// the period.
    pub status: Option<Semaphore>,
}

impl ProcessScorecard {
    /// Aggregate a process's records for one period.
    ///
    /// Records belonging to other processes or periods are ignored, so
    /// callers can pass the full record store.
    pub fn build(process: &Process, records: &[MeasurementRecord], period: Period) -> Self {
        let matching = records
            .iter()
            .filter(|r| r.process_id == process.id && r.period == period);
        Self::from_records(process, matching)
    }

    /// Aggregate from an already-selected record set.
    fn from_records<'a>(
        process: &Process,
        records: impl Iterator<Item = &'a MeasurementRecord>,
    ) -> Self {
        let mut record_count = 0usize;
        let mut meeting_target = 0usize;
        let mut percentage_sum = 0.0f64;
        let mut distribution = SemaphoreDistribution::default();

        for record in records {
            record_count += 1;
            percentage_sum += record.percentage;
            if record.meets_target {
                meeting_target += 1;
            }
            distribution.count(record.semaphore);
        }

        let mean_percentage = if record_count == 0 {
            0.0
        } else {
            percentage_sum / record_count as f64
        };

        let status = if record_count == 0 {
            None
        } else if meeting_target == record_count {
            Some(Semaphore::Green)
        } else if meeting_target as f64 / record_count as f64 >= 0.5 {
            Some(Semaphore::Yellow)
        } else {
            Some(Semaphore::Red)
        };

        Self {
            process_id: process.id,
            process_code: process.code.clone(),
            process_name: process.name.clone(),
            record_count,
            mean_percentage,
            meeting_target,
            distribution,
            status,
        }
    }

    fn empty(process: &Process) -> Self {
        Self::from_records(process, std::iter::empty())
    }

    /// Whether the process reported anything for the period.
    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }
}

// ─── Organization Summary ────────────────────────────────────────────

/// The organization-wide rollup for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgSummary {
    /// The period summarized: the requested one, or the latest present in
    /// the records. `None` when the store is empty and nothing was
    /// requested.
    pub period: Option<Period>,
    /// One scorecard per catalog process, in catalog order.
    pub scorecards: Vec<ProcessScorecard>,
    /// Total processes in the catalog.
    pub process_count: usize,
    /// Processes that reported at least one record for the period.
    pub processes_with_data: usize,
    /// Processes whose status light is green.
    pub compliant_processes: usize,
    /// Processes whose status light is yellow or red.
    pub at_risk_processes: usize,
    /// Measurement records counted into this period.
    pub reported_records: usize,
    /// Mean of the per-process means, over processes with data. Zero when
    /// nothing reported.
    pub global_mean: f64,
}

impl OrgSummary {
    /// Roll up every catalog process for `period`, defaulting to the
    /// latest period present in the records.
    pub fn build(
        catalog: &Catalog,
        records: &[MeasurementRecord],
        period: Option<Period>,
    ) -> Self {
        let period = period.or_else(|| records.iter().map(|r| r.period).max());

        let scorecards: Vec<ProcessScorecard> = match period {
            Some(p) => catalog
                .processes
                .iter()
                .map(|process| ProcessScorecard::build(process, records, p))
                .collect(),
            None => catalog.processes.iter().map(ProcessScorecard::empty).collect(),
        };

        let processes_with_data = scorecards.iter().filter(|s| s.has_data()).count();
        let compliant_processes = scorecards
            .iter()
            .filter(|s| s.status == Some(Semaphore::Green))
            .count();
        let at_risk_processes = scorecards
            .iter()
            .filter(|s| matches!(s.status, Some(Semaphore::Yellow) | Some(Semaphore::Red)))
            .count();
        let reported_records = scorecards.iter().map(|s| s.record_count).sum();
        let global_mean = if processes_with_data == 0 {
            0.0
        } else {
            scorecards
                .iter()
                .filter(|s| s.has_data())
                .map(|s| s.mean_percentage)
                .sum::<f64>()
                / processes_with_data as f64
        };

        Self {
            period,
            process_count: catalog.processes.len(),
            scorecards,
            processes_with_data,
            compliant_processes,
            at_risk_processes,
            reported_records,
            global_mean,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

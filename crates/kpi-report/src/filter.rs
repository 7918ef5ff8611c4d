//! # Record Filtering and Pagination
//!
//! [`RecordFilter`] narrows a record store by process, indicator, and an
//! inclusive period range; every criterion left unset matches all
//! records. [`paginate`] slices a filtered set into 1-based pages for
//! tabular display.

use serde::Serialize;

use kpi_core::{IndicatorId, Period, ProcessId};
use kpi_records::MeasurementRecord;

// ─── Record Filter ───────────────────────────────────────────────────

/// Conjunctive filter over measurement records. The default filter
/// matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordFilter {
    /// Keep only records of this process.
    pub process: Option<ProcessId>,
    /// Keep only records of this indicator.
    pub indicator: Option<IndicatorId>,
    /// Keep only records from this period on, inclusive.
    pub from: Option<Period>,
    /// Keep only records up to this period, inclusive.
    pub to: Option<Period>,
}

impl RecordFilter {
    /// Whether a record passes every set criterion.
    pub fn matches(&self, record: &MeasurementRecord) -> bool {
        if let Some(process) = self.process {
            if record.process_id != process {
                return false;
            }
        }
        if let Some(indicator) = self.indicator {
            if record.indicator_id != indicator {
                return false;
            }
        }
        if let Some(from) = self.from {
            if record.period < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.period > to {
                return false;
            }
        }
        true
    }

    /// Select the matching records, preserving store order.
    pub fn apply<'a>(&self, records: &'a [MeasurementRecord]) -> Vec<&'a MeasurementRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

// ─── Pagination ──────────────────────────────────────────────────────

/// One page of a filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a> {
    /// The records on this page.
    pub items: Vec<&'a MeasurementRecord>,
    /// The 1-based page number actually served.
    pub page: usize,
    /// Total pages in the set. At least 1, even for an empty set.
    pub total_pages: usize,
    /// Total records across all pages.
    pub total_records: usize,
}

/// Slice a record set into 1-based pages of `per_page` records.
///
/// Out-of-range page numbers clamp to the nearest valid page, so asking
/// for page 0 serves page 1 and asking past the end serves the last
/// page. A `per_page` of zero is treated as 1.
pub fn paginate<'a>(records: &[&'a MeasurementRecord], page: usize, per_page: usize) -> Page<'a> {
    let per_page = per_page.max(1);
    let total_records = records.len();
    let total_pages = total_records.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let items = records.iter().skip(start).take(per_page).copied().collect();

    Page {
        items,
        page,
        total_pages,
        total_records,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

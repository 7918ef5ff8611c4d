//! # kpi-report — Read-Side Projections
//!
//! Aggregations over stored measurement records: per-process scorecards,
//! the organization-wide summary, per-indicator trend series, and the
//! filter/pagination machinery behind history views.
//!
//! Everything here reads the evaluation outputs **stored on the records**
//! (percentage, semaphore, target check) and never re-evaluates results
//! against the current catalog. A threshold change therefore shows up in
//! new submissions, not in reported history.

pub mod filter;
pub mod scorecard;
pub mod trend;

pub use filter::{paginate, Page, RecordFilter};
pub use scorecard::{OrgSummary, ProcessScorecard, SemaphoreDistribution};
pub use trend::{TrendPoint, TrendSeries};

//! # kpi-core — Core Domain Types for the KPI Stack
//!
//! Foundation crate for the institutional KPI tracking stack. Defines the
//! vocabulary every other crate speaks: typed identifiers, the process and
//! indicator taxonomy, measurement periods, and the shared error hierarchy.
//!
//! ## Design
//!
//! - Every identifier is a newtype. A `ProcessId` cannot be passed where an
//!   `IndicatorId` is expected, and business codes (`ProcessCode`,
//!   `IndicatorCode`) are validated at construction so downstream code never
//!   re-checks format.
//! - Enums are the single source of truth for their taxonomy. Every `match`
//!   must be exhaustive, so adding a process kind or a reporting frequency
//!   forces every consumer to handle it at compile time.
//! - No ambient state. Nothing in this crate reads globals, caches, or
//!   clocks; callers pass everything in.
//!
//! This crate has no internal dependencies. All other KPI crates depend on it.

pub mod domain;
pub mod error;
pub mod identity;
pub mod period;

pub use domain::{Frequency, IndicatorKind, IndicatorStatus, ProcessKind, UserRole};
pub use error::{KpiError, ValidationError};
pub use identity::{IndicatorCode, IndicatorId, ProcessCode, ProcessId, RecordId, UserId};
pub use period::{Period, PeriodRange};

//! # kpi-engine — Threshold Evaluation for Performance Indicators
//!
//! The pure computational core of the KPI stack. Given a measured result,
//! a target, and a validated threshold band, this crate answers three
//! questions:
//!
//! 1. **How far along is the indicator?** A compliance percentage in
//!    `0..=100` ([`compliance_percentage`]).
//! 2. **What traffic light does it show?** A [`Semaphore`] classification
//!    of the raw result against the band ([`classify`]).
//! 3. **Was the goal met?** A polarity-aware target check
//!    ([`meets_target`]).
//!
//! ## Polarity
//!
//! Most indicators are *direct*: higher results are better (revenue,
//! coverage, satisfaction). Some are *inverse*: lower results are better
//! (defect counts, response times, complaints). Polarity is an explicit,
//! stored property of each indicator's [`ThresholdBand`]; evaluation never
//! guesses it from data. The `infer-polarity` cargo feature re-enables the
//! historical fallback that derived polarity from threshold ordering, for
//! catalogs that predate the explicit field.
//!
//! ## Totality
//!
//! Every function here is total over `f64`, including NaN and the
//! infinities. Non-finite garbage never reads as success: a NaN result
//! yields a 0 percentage, a `Red` semaphore, and a failed target check.
//! Functions in this crate perform no IO. The only logging is a warning
//! emitted when the `infer-polarity` fallback meets an ambiguous
//! threshold ordering; everything else leaves observability to callers.

pub mod error;
pub mod evaluate;
pub mod polarity;
pub mod semaphore;
pub mod threshold;

pub use error::EngineError;
pub use evaluate::{
    clamp_percentage, classify, compliance_percentage, format_percent, meets_target, Evaluation,
};
pub use polarity::Polarity;
pub use semaphore::Semaphore;
pub use threshold::ThresholdBand;

#[cfg(feature = "infer-polarity")]
pub use evaluate::{classify_inferred, compliance_percentage_inferred, meets_target_inferred};

//! # kpi-records — Measurement Records and Their Lifecycle
//!
//! The write side of the KPI stack. A [`MeasurementRecord`] captures one
//! measured result for one indicator in one period, together with the
//! evaluation outputs (compliance percentage, semaphore, target check)
//! computed at submission time. Storing the outputs with the record keeps
//! history stable: re-tuning a threshold band changes future evaluations,
//! never the published past.
//!
//! ## Lifecycle
//!
//! ```text
//! Draft ──▶ Submitted ──▶ Reviewed (terminal)
//!   ▲           │
//!   └───────────┘  (returned for correction)
//! ```
//!
//! Review requires the administrator role. Every transition appends to an
//! ordered log carrying the actor and a note.

pub mod record;
pub mod submission;

pub use record::{
    MeasurementRecord, RecordError, RecordState, RecordTransition, RecordTransitionEvidence,
};
pub use submission::{submit_measurement, MeasurementSubmission, SubmissionError, Submitter};

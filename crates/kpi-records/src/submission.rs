//! # Measurement Submission — The Single Evaluation Point
//!
//! [`submit_measurement`] is the one place in the stack where a raw
//! result meets its catalog definition and acquires evaluation outputs.
//! It checks, in order: the indicator exists and is active, the catalog's
//! process reference resolves, the submitter is authorized for the
//! process, the result is finite, and no record already exists for the
//! same indicator and period. Only then does it evaluate and build the
//! record.
//!
//! Everything is passed in explicitly: the catalog, the existing records,
//! the submitter, and the entry timestamp. No ambient state, no hidden
//! clock, no cache.

use chrono::{DateTime, Utc};
use thiserror::Error;

use kpi_catalog::Catalog;
use kpi_core::{IndicatorCode, Period, ProcessId, RecordId, UserId, UserRole};
use kpi_engine::EngineError;

use crate::record::{MeasurementRecord, RecordError, RecordState, RecordTransitionEvidence};

// ─── Submitter ───────────────────────────────────────────────────────

/// The user entering a measurement.
#[derive(Debug, Clone)]
pub struct Submitter {
    /// Account identity, stamped on the record and its transition log.
    pub user_id: UserId,
    /// Display name, denormalized onto the record.
    pub name: String,
    /// Access role. Administrators submit for any process.
    pub role: UserRole,
    /// The process this user leads, when the role is process leader.
    pub process_id: Option<ProcessId>,
}

impl Submitter {
    /// Whether this user may submit measurements for the given process.
    pub fn may_submit_for(&self, process: &ProcessId) -> bool {
        match self.role {
            UserRole::Administrator => true,
            UserRole::ProcessLeader => self.process_id.as_ref() == Some(process),
        }
    }
}

// ─── Submission ──────────────────────────────────────────────────────

/// One measurement as entered by a user, before evaluation.
#[derive(Debug, Clone)]
pub struct MeasurementSubmission {
    /// Which indicator is being measured, by catalog code.
    pub indicator: IndicatorCode,
    /// The period the result reports against.
    pub period: Period,
    /// The raw measured result.
    pub result: f64,
    /// Free-form observations.
    pub notes: Option<String>,
    /// Corrective action plan.
    pub improvement_action: Option<String>,
    /// Hand the record straight to review instead of keeping a draft.
    pub finalize: bool,
}

/// Errors raised while accepting a measurement.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The catalog has no indicator with this code.
    #[error("unknown indicator {code}")]
    UnknownIndicator {
        /// The code as entered.
        code: String,
    },

    /// The indicator exists but no longer accepts measurements.
    #[error("indicator {code} is inactive")]
    InactiveIndicator {
        /// The indicator's code.
        code: String,
    },

    /// The indicator references a process the catalog does not define.
    /// Points at an unvalidated or hand-edited catalog.
    #[error("indicator {code} references unknown process {process}")]
    UnknownProcess {
        /// The indicator's code.
        code: String,
        /// The dangling reference.
        process: String,
    },

    /// The submitter may not report for the indicator's process.
    #[error("user {user} is not authorized to submit for process {process}")]
    NotAuthorized {
        /// The submitter's identity.
        user: String,
        /// The target process.
        process: String,
    },

    /// The result was NaN or infinite.
    #[error("result must be finite, got {value}")]
    NonFiniteResult {
        /// The rejected value.
        value: f64,
    },

    /// A record for this indicator and period already exists.
    #[error("a record for {code} in {period} already exists")]
    DuplicatePeriod {
        /// The indicator's code.
        code: String,
        /// The already-covered period.
        period: Period,
    },

    /// The indicator's stored thresholds do not form a coherent band.
    #[error("indicator {code} has an invalid threshold band")]
    InvalidThresholds {
        /// The indicator's code.
        code: String,
        /// Why the band was rejected.
        #[source]
        source: EngineError,
    },

    /// A lifecycle transition failed while finalizing the record.
    #[error("record lifecycle error: {0}")]
    Lifecycle(#[from] RecordError),
}

/// Accept one measurement: authorize, evaluate, and build the record.
///
/// On success the returned record carries the evaluation outputs computed
/// from the band in force right now, starts in `Draft` (or `Submitted`
/// when the submission is flagged final), and is ready to append to the
/// record store. The existing records are only read for the duplicate
/// check; this function never mutates its inputs.
///
/// # Errors
///
/// See [`SubmissionError`]. Authorization and duplicate rejections are
/// logged at `warn` since they usually indicate a UI or workflow problem
/// upstream.
pub fn submit_measurement(
    catalog: &Catalog,
    existing: &[MeasurementRecord],
    submitter: &Submitter,
    submission: MeasurementSubmission,
    recorded_at: DateTime<Utc>,
) -> Result<MeasurementRecord, SubmissionError> {
    let indicator = catalog
        .indicator_by_code(&submission.indicator)
        .ok_or_else(|| SubmissionError::UnknownIndicator {
            code: submission.indicator.to_string(),
        })?;

    if !indicator.is_active() {
        return Err(SubmissionError::InactiveIndicator {
            code: indicator.code.to_string(),
        });
    }

    if catalog.process_by_id(&indicator.process_id).is_none() {
        return Err(SubmissionError::UnknownProcess {
            code: indicator.code.to_string(),
            process: indicator.process_id.to_string(),
        });
    }

    if !submitter.may_submit_for(&indicator.process_id) {
        tracing::warn!(
            user = %submitter.user_id,
            role = %submitter.role,
            process = %indicator.process_id,
            "submission rejected: not authorized for process"
        );
        return Err(SubmissionError::NotAuthorized {
            user: submitter.user_id.to_string(),
            process: indicator.process_id.to_string(),
        });
    }

    if !submission.result.is_finite() {
        return Err(SubmissionError::NonFiniteResult {
            value: submission.result,
        });
    }

    let duplicate = existing
        .iter()
        .any(|r| r.indicator_id == indicator.id && r.period == submission.period);
    if duplicate {
        tracing::warn!(
            indicator = %indicator.code,
            period = %submission.period,
            "submission rejected: period already recorded"
        );
        return Err(SubmissionError::DuplicatePeriod {
            code: indicator.code.to_string(),
            period: submission.period,
        });
    }

    let band = indicator
        .threshold_band()
        .map_err(|source| SubmissionError::InvalidThresholds {
            code: indicator.code.to_string(),
            source,
        })?;
    let evaluation = band.evaluate(submission.result, indicator.target);

    let mut record = MeasurementRecord {
        id: RecordId::new(),
        indicator_id: indicator.id,
        process_id: indicator.process_id,
        period: submission.period,
        result: submission.result,
        target: indicator.target,
        unit: indicator.unit.clone(),
        percentage: evaluation.percentage,
        semaphore: evaluation.semaphore,
        meets_target: evaluation.meets_target,
        state: RecordState::Draft,
        notes: submission.notes,
        improvement_action: submission.improvement_action,
        submitted_by: submitter.user_id,
        submitted_by_name: submitter.name.clone(),
        recorded_at,
        transitions: Vec::new(),
    };

    if submission.finalize {
        record.submit(RecordTransitionEvidence {
            note: "submitted at entry".to_string(),
            actor: submitter.user_id,
        })?;
    }

    Ok(record)
}

// ─── Tests ───────────────────────────────────────────────────────────

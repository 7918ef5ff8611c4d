//! # Measurement Record Lifecycle State Machine
//!
//! Models the life of a single measurement from data entry through
//! review sign-off.
//!
//! ## States
//!
//! ```text
//! Draft ──▶ Submitted ──▶ Reviewed (terminal)
//!   ▲           │
//!   └───────────┘  (returned for correction)
//! ```
//!
//! A draft belongs to the submitter and can still be edited. Submitting
//! hands it to review; a reviewer either accepts it (terminal) or returns
//! it to draft for correction. Only administrators review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use kpi_core::{IndicatorId, Period, ProcessId, RecordId, UserId, UserRole};
use kpi_engine::Semaphore;

// ─── Record State ────────────────────────────────────────────────────

/// The lifecycle state of a measurement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordState {
    /// Being entered or corrected; editable by the submitter.
    Draft,
    /// Handed over for review; frozen for the submitter.
    Submitted,
    /// Accepted by a reviewer (terminal).
    Reviewed,
}

impl RecordState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reviewed)
    }

    /// Whether the submitter may still edit the record.
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Reviewed => "REVIEWED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during record lifecycle transitions.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Attempted transition is not valid from the current state.
    #[error("invalid record transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted target state.
        to: String,
    },

    /// Record is in a terminal state.
    #[error("record is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: String,
    },

    /// Review was attempted by a non-administrator.
    #[error("review requires the administrator role, got {role}")]
    ReviewRequiresAdministrator {
        /// The offending role.
        role: String,
    },
}

// ─── Transition Evidence ─────────────────────────────────────────────

/// Evidence for a record lifecycle transition.
#[derive(Debug, Clone)]
pub struct RecordTransitionEvidence {
    /// Why the transition happened.
    pub note: String,
    /// Who initiated it.
    pub actor: UserId,
}

/// One entry in a record's transition log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordTransition {
    /// State before the transition.
    pub from_state: RecordState,
    /// State after the transition.
    pub to_state: RecordState,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
    /// Why the transition happened.
    pub note: String,
    /// Who initiated it.
    pub actor: UserId,
}

// ─── Measurement Record ──────────────────────────────────────────────

/// One measured result for one indicator in one period.
///
/// The evaluation outputs (`percentage`, `semaphore`, `meets_target`) are
/// computed exactly once, at submission, from the threshold band in force
/// at that moment. Reporting reads the stored values and never
/// re-evaluates, so threshold changes cannot rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Storage identity.
    pub id: RecordId,
    /// The measured indicator.
    pub indicator_id: IndicatorId,
    /// The process owning the indicator, denormalized for reporting.
    pub process_id: ProcessId,
    /// The period the measurement reports against.
    pub period: Period,
    /// The raw measured result.
    pub result: f64,
    /// The target in force when the measurement was submitted.
    pub target: f64,
    /// Unit of the result and target.
    pub unit: String,
    /// Stored compliance percentage, `0..=100`.
    pub percentage: f64,
    /// Stored traffic-light classification.
    pub semaphore: Semaphore,
    /// Stored polarity-aware target check.
    pub meets_target: bool,
    /// Lifecycle state.
    pub state: RecordState,
    /// Free-form observations from the submitter.
    #[serde(default)]
    pub notes: Option<String>,
    /// Corrective action plan, expected when the light is not green.
    #[serde(default)]
    pub improvement_action: Option<String>,
    /// Who entered the measurement.
    pub submitted_by: UserId,
    /// Display name of the submitter, denormalized for reporting.
    pub submitted_by_name: String,
    /// When the measurement was entered.
    pub recorded_at: DateTime<Utc>,
    /// Ordered log of all state transitions.
    #[serde(default)]
    pub transitions: Vec<RecordTransition>,
}

impl MeasurementRecord {
    /// Hand the draft over for review (DRAFT → SUBMITTED).
    pub fn submit(&mut self, evidence: RecordTransitionEvidence) -> Result<(), RecordError> {
        self.require_state(RecordState::Draft, "SUBMITTED")?;
        self.do_transition(RecordState::Submitted, evidence);
        Ok(())
    }

    /// Return a submitted record for correction (SUBMITTED → DRAFT).
    pub fn return_to_draft(
        &mut self,
        evidence: RecordTransitionEvidence,
    ) -> Result<(), RecordError> {
        self.require_state(RecordState::Submitted, "DRAFT")?;
        self.do_transition(RecordState::Draft, evidence);
        Ok(())
    }

    /// Accept a submitted record (SUBMITTED → REVIEWED).
    ///
    /// Only administrators review; the reviewer's role is checked before
    /// the state is.
    pub fn review(
        &mut self,
        evidence: RecordTransitionEvidence,
        reviewer_role: UserRole,
    ) -> Result<(), RecordError> {
        if !reviewer_role.can_review() {
            return Err(RecordError::ReviewRequiresAdministrator {
                role: reviewer_role.to_string(),
            });
        }
        self.require_state(RecordState::Submitted, "REVIEWED")?;
        self.do_transition(RecordState::Reviewed, evidence);
        Ok(())
    }

    /// Whether the submitter may still edit the record.
    pub fn is_editable(&self) -> bool {
        self.state.is_editable()
    }

    /// Whether the record is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Validate that the record is in the expected state.
    fn require_state(&self, expected: RecordState, target: &str) -> Result<(), RecordError> {
        if self.state.is_terminal() {
            return Err(RecordError::TerminalState {
                state: self.state.to_string(),
            });
        }
        if self.state != expected {
            return Err(RecordError::InvalidTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: RecordState, evidence: RecordTransitionEvidence) {
        self.transitions.push(RecordTransition {
            from_state: self.state,
            to_state: to,
            timestamp: Utc::now(),
            note: evidence.note,
            actor: evidence.actor,
        });
        self.state = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

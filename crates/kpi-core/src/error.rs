//! # Error Types — Structured Error Hierarchy
//!
//! Defines the shared error types for the KPI stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors carry the offending value and the rule it broke, so
//!   a CLI or API layer can surface them without reconstructing context.
//! - Crates with richer failure modes (catalog loading, record lifecycle,
//!   submission) define their own error enums and convert into [`KpiError`]
//!   only at the outermost boundary.

use thiserror::Error;

/// Top-level error type for the KPI stack.
#[derive(Error, Debug)]
pub enum KpiError {
    /// A core type rejected its input at construction or parse time.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Construction-time validation failures for core identifier and calendar
/// types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A process code failed format validation.
    #[error("invalid process code {value:?}: {reason}")]
    InvalidProcessCode {
        /// The rejected input.
        value: String,
        /// Which format rule was broken.
        reason: &'static str,
    },

    /// An indicator code failed format validation.
    #[error("invalid indicator code {value:?}: {reason}")]
    InvalidIndicatorCode {
        /// The rejected input.
        value: String,
        /// Which format rule was broken.
        reason: &'static str,
    },

    /// A period string failed to parse.
    #[error("invalid period {value:?}: {reason}")]
    InvalidPeriod {
        /// The rejected input.
        value: String,
        /// Which format rule was broken.
        reason: &'static str,
    },

    /// A string did not name any variant of a domain enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownEnumValue {
        /// Which enum was being parsed (e.g. "process kind").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },
}

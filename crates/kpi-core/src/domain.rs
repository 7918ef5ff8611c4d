//! # Domain Taxonomy — Single Source of Truth
//!
//! Defines the enums that classify processes, indicators, users, and
//! reporting cadence across the KPI stack. Each enum is the ONE definition
//! used everywhere. Every `match` must be exhaustive, so adding a variant
//! forces every consumer to handle it at compile time.
//!
//! The taxonomy follows the quality-management model the stack was built
//! for: processes are strategic, mission, or support; indicators measure
//! efficiency, efficacy, effectiveness, or compliance; and each indicator
//! reports on a fixed calendar cadence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

// ─── Process Kind ────────────────────────────────────────────────────

/// Classification of an institutional process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    /// Direction-setting processes (planning, management review).
    Strategic,
    /// Value-delivering processes at the core of the institution's mandate.
    Mission,
    /// Enabling processes (finance, talent, infrastructure, IT).
    Support,
}

impl ProcessKind {
    /// Returns all process kinds in canonical order.
    pub fn all() -> &'static [ProcessKind] {
        &[Self::Strategic, Self::Mission, Self::Support]
    }

    /// Returns the snake_case string identifier for this kind.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategic => "strategic",
            Self::Mission => "mission",
            Self::Support => "support",
        }
    }
}

impl std::fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strategic" => Ok(Self::Strategic),
            "mission" => Ok(Self::Mission),
            "support" => Ok(Self::Support),
            other => Err(ValidationError::UnknownEnumValue {
                kind: "process kind",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Indicator Kind ──────────────────────────────────────────────────

/// What dimension of performance an indicator measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Resource usage relative to output (doing things economically).
    Efficiency,
    /// Goal attainment (doing the right things).
    Efficacy,
    /// Combined impact of efficiency and efficacy.
    Effectiveness,
    /// Adherence to a norm or obligation.
    Compliance,
}

impl IndicatorKind {
    /// Returns all indicator kinds in canonical order.
    pub fn all() -> &'static [IndicatorKind] {
        &[
            Self::Efficiency,
            Self::Efficacy,
            Self::Effectiveness,
            Self::Compliance,
        ]
    }

    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Efficiency => "efficiency",
            Self::Efficacy => "efficacy",
            Self::Effectiveness => "effectiveness",
            Self::Compliance => "compliance",
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "efficiency" => Ok(Self::Efficiency),
            "efficacy" => Ok(Self::Efficacy),
            "effectiveness" => Ok(Self::Effectiveness),
            "compliance" => Ok(Self::Compliance),
            other => Err(ValidationError::UnknownEnumValue {
                kind: "indicator kind",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Reporting Frequency ─────────────────────────────────────────────

/// How often an indicator is measured.
///
/// | Frequency  | Months per period | Periods per year |
/// |------------|-------------------|------------------|
/// | Monthly    | 1                 | 12               |
/// | Bimonthly  | 2                 | 6                |
/// | Quarterly  | 3                 | 4                |
/// | Semiannual | 6                 | 2                |
/// | Annual     | 12                | 1                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Measured every month.
    Monthly,
    /// Measured every two months.
    Bimonthly,
    /// Measured every three months.
    Quarterly,
    /// Measured every six months.
    Semiannual,
    /// Measured once a year.
    Annual,
}

impl Frequency {
    /// Returns all frequencies in canonical order, shortest period first.
    pub fn all() -> &'static [Frequency] {
        &[
            Self::Monthly,
            Self::Bimonthly,
            Self::Quarterly,
            Self::Semiannual,
            Self::Annual,
        ]
    }

    /// Number of calendar months covered by one measurement period.
    pub fn months_per_period(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Bimonthly => 2,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
            Self::Annual => 12,
        }
    }

    /// Number of measurement periods in a calendar year.
    pub fn periods_per_year(&self) -> u32 {
        12 / self.months_per_period()
    }

    /// Returns the snake_case string identifier for this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Bimonthly => "bimonthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "bimonthly" => Ok(Self::Bimonthly),
            "quarterly" => Ok(Self::Quarterly),
            "semiannual" => Ok(Self::Semiannual),
            "annual" => Ok(Self::Annual),
            other => Err(ValidationError::UnknownEnumValue {
                kind: "frequency",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Indicator Status ────────────────────────────────────────────────

/// Whether an indicator currently accepts measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorStatus {
    /// Accepting measurements.
    Active,
    /// Retired or suspended. Historical records remain queryable.
    Inactive,
}

impl IndicatorStatus {
    /// Returns both statuses.
    pub fn all() -> &'static [IndicatorStatus] {
        &[Self::Active, Self::Inactive]
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for IndicatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ValidationError::UnknownEnumValue {
                kind: "indicator status",
                value: other.to_string(),
            }),
        }
    }
}

// ─── User Role ───────────────────────────────────────────────────────

/// Access role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access: manages the catalog, submits for any process, and
    /// reviews submitted records.
    Administrator,
    /// Submits measurements for the single process they lead.
    ProcessLeader,
}

impl UserRole {
    /// Returns both roles.
    pub fn all() -> &'static [UserRole] {
        &[Self::Administrator, Self::ProcessLeader]
    }

    /// Whether this role may move a submitted record to reviewed.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Returns the snake_case string identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::ProcessLeader => "process_leader",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Self::Administrator),
            "process_leader" => Ok(Self::ProcessLeader),
            other => Err(ValidationError::UnknownEnumValue {
                kind: "user role",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

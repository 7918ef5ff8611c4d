//! # Identifiers — Typed IDs and Business Codes
//!
//! Newtypes for every identifier in the KPI stack. Storage identities
//! (`ProcessId`, `IndicatorId`, `RecordId`, `UserId`) are UUID-based and
//! always valid by construction. Business codes (`ProcessCode`,
//! `IndicatorCode`) are the short human-assigned labels that appear in
//! catalogs and reports, and are validated at construction time.
//!
//! ## Code Formats
//!
//! - `ProcessCode`: 1 to 12 characters, uppercase letters, digits, and
//!   hyphens, starting with a letter. Examples: `GF`, `GTH`, `SIG-2`.
//! - `IndicatorCode`: a process code prefix, a hyphen, and a zero-padded
//!   sequence number of at least two digits. Examples: `GF-01`, `GTH-12`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

// ─── Storage Identities ──────────────────────────────────────────────

/// Unique identifier for an institutional process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(pub Uuid);

impl ProcessId {
    /// Create a new random process identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a process identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProcessId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "process:{}", self.0)
    }
}

/// Unique identifier for a performance indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub Uuid);

impl IndicatorId {
    /// Create a new random indicator identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an indicator identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for IndicatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "indicator:{}", self.0)
    }
}

/// Unique identifier for a measurement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Create a new random record identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a record identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record:{}", self.0)
    }
}

/// Unique identifier for a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

// ─── Process Code ────────────────────────────────────────────────────

/// The short human-assigned label for a process, e.g. `GF` for financial
/// management or `GTH` for talent management.
///
/// # Validation
///
/// 1 to 12 characters, uppercase letters, digits, and hyphens only, and the
/// first character must be a letter. Validated at construction; a
/// `ProcessCode` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcessCode(String);

impl ProcessCode {
    /// Maximum code length in characters.
    pub const MAX_LEN: usize = 12;

    /// Create a process code, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProcessCode`] when the input is
    /// empty, too long, starts with a non-letter, or contains a character
    /// outside `[A-Z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let invalid = |reason| ValidationError::InvalidProcessCode {
            value: value.clone(),
            reason,
        };
        if value.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(invalid("must be 12 characters or fewer"));
        }
        let mut chars = value.chars();
        match chars.next() {
            Some(c) if c.is_ascii_uppercase() => {}
            _ => return Err(invalid("must start with an uppercase letter")),
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid("may only contain uppercase letters, digits, and hyphens"));
        }
        Ok(Self(value))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProcessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProcessCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ProcessCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ─── Indicator Code ──────────────────────────────────────────────────

/// The short human-assigned label for an indicator, e.g. `GF-01`.
///
/// An indicator code is a process code prefix, a hyphen, and a sequence
/// number of at least two digits. The prefix identifies the process the
/// indicator belongs to; catalog validation cross-checks it against the
/// owning process record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndicatorCode(String);

impl IndicatorCode {
    /// Create an indicator code, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIndicatorCode`] when the input has
    /// no hyphen, when the prefix is not a valid process code, or when the
    /// suffix is not a sequence number of at least two digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let invalid = |reason| ValidationError::InvalidIndicatorCode {
            value: value.clone(),
            reason,
        };
        let Some((prefix, number)) = value.rsplit_once('-') else {
            return Err(invalid("must contain a hyphen separating prefix and number"));
        };
        if ProcessCode::new(prefix).is_err() {
            return Err(invalid("prefix must be a valid process code"));
        }
        if number.len() < 2 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("sequence number must be at least two digits"));
        }
        Ok(Self(value))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The process code prefix, e.g. `GF` for `GF-01`.
    pub fn prefix(&self) -> &str {
        // Validated at construction, the hyphen is always present.
        match self.0.rsplit_once('-') {
            Some((prefix, _)) => prefix,
            None => &self.0,
        }
    }

    /// The sequence number suffix, e.g. `01` for `GF-01`.
    pub fn number(&self) -> &str {
        match self.0.rsplit_once('-') {
            Some((_, number)) => number,
            None => "",
        }
    }
}

impl std::fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IndicatorCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for IndicatorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

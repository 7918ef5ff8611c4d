//! Institutional process definitions.

use serde::{Deserialize, Serialize};

use kpi_core::{ProcessCode, ProcessId, ProcessKind, UserId};

/// An institutional process: a named area of work that owns indicators.
///
/// Processes partition the institution's quality-management map into
/// strategic, mission, and support areas. Each may designate one user as
/// its leader, the account allowed to submit measurements for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Storage identity.
    pub id: ProcessId,
    /// Short human-assigned label, unique across the catalog.
    pub code: ProcessCode,
    /// Full display name.
    pub name: String,
    /// Strategic, mission, or support.
    pub kind: ProcessKind,
    /// The user leading this process, if one is assigned.
    #[serde(default)]
    pub leader: Option<UserId>,
}

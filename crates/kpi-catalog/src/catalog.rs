//! Catalog container and file loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use kpi_core::{IndicatorCode, IndicatorId, ProcessCode, ProcessId};

use crate::indicator::Indicator;
use crate::process::Process;

/// Errors raised while loading a catalog from disk.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file being loaded.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file was not valid YAML for a catalog.
    #[error("failed to parse {path} as YAML: {source}")]
    Yaml {
        /// The file being loaded.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The file was not valid JSON for a catalog.
    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        /// The file being loaded.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The file extension named no supported format.
    #[error("unsupported catalog format: {path} (expected .yaml, .yml, or .json)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },
}

/// The full set of process and indicator definitions.
///
/// Lookups are linear scans: catalogs hold tens of entries, and keeping
/// the container a plain pair of vectors preserves file order for
/// reporting and error paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All institutional processes.
    #[serde(default)]
    pub processes: Vec<Process>,
    /// All indicators, across every process.
    #[serde(default)]
    pub indicators: Vec<Indicator>,
}

impl Catalog {
    /// Load a catalog from a YAML or JSON file, dispatching on the
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, fails to
    /// parse, or has an unrecognized extension. Field-level format errors
    /// (bad codes, bad enums) surface as parse errors here; catalog-wide
    /// consistency is checked separately by
    /// [`validate_catalog`](crate::validate::validate_catalog).
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&raw).map_err(|source| CatalogError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Some("json") => serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            }),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Find a process by storage identity.
    pub fn process_by_id(&self, id: &ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == *id)
    }

    /// Find a process by its short code.
    pub fn process_by_code(&self, code: &ProcessCode) -> Option<&Process> {
        self.processes.iter().find(|p| p.code == *code)
    }

    /// Find an indicator by storage identity.
    pub fn indicator_by_id(&self, id: &IndicatorId) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.id == *id)
    }

    /// Find an indicator by its short code.
    pub fn indicator_by_code(&self, code: &IndicatorCode) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.code == *code)
    }

    /// All indicators belonging to a process, in file order.
    pub fn indicators_for(&self, process: &ProcessId) -> Vec<&Indicator> {
        self.indicators
            .iter()
            .filter(|i| i.process_id == *process)
            .collect()
    }

    /// The indicators of a process that currently accept measurements.
    pub fn active_indicators_for(&self, process: &ProcessId) -> Vec<&Indicator> {
        self.indicators
            .iter()
            .filter(|i| i.process_id == *process && i.is_active())
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

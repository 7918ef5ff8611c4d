//! # Catalog Validation — Accumulated Consistency Checks
//!
//! Whole-catalog rules that no single field can express: uniqueness of
//! codes and identities, referential integrity from indicators to
//! processes, agreement between indicator code prefixes and their owning
//! process, and coherence of every threshold band.
//!
//! Validation never short-circuits. Every broken entry produces a
//! [`Violation`] with a JSON-pointer-style path into the file, and the
//! whole set returns together so a catalog author fixes one upload, not
//! one error per upload.

use std::collections::HashSet;

use kpi_core::{IndicatorCode, IndicatorId, ProcessCode, ProcessId};

use crate::catalog::Catalog;

/// A single consistency failure, addressed by a path into the catalog
/// document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON-pointer-style location, e.g. `/indicators/3/process_id`.
    /// Empty for whole-document failures.
    pub instance_path: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// The accumulated result of validating one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogViolations {
    violations: Vec<Violation>,
}

impl CatalogViolations {
    /// Number of violations found.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the catalog passed every check.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The individual violations, in document order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the set, yielding the violations.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, instance_path: String, message: String) {
        self.violations.push(Violation {
            instance_path,
            message,
        });
    }
}

impl std::fmt::Display for CatalogViolations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", rendered.join("\n"))
    }
}

/// Run every consistency check over a catalog.
///
/// Checks, in order:
///
/// 1. process identities and codes are unique,
/// 2. process and indicator names are non-empty,
/// 3. indicator identities and codes are unique,
/// 4. every indicator references an existing process,
/// 5. each indicator code prefix matches its owning process code,
/// 6. every target is finite,
/// 7. every threshold band promotes cleanly (finite, distinct, ordered
///    with its polarity).
pub fn validate_catalog(catalog: &Catalog) -> CatalogViolations {
    let mut out = CatalogViolations::default();

    let mut process_ids: HashSet<ProcessId> = HashSet::new();
    let mut process_codes: HashSet<ProcessCode> = HashSet::new();
    for (i, process) in catalog.processes.iter().enumerate() {
        if !process_ids.insert(process.id) {
            out.push(
                format!("/processes/{i}"),
                format!("duplicate process id {}", process.id),
            );
        }
        if !process_codes.insert(process.code.clone()) {
            out.push(
                format!("/processes/{i}/code"),
                format!("duplicate process code {}", process.code),
            );
        }
        if process.name.trim().is_empty() {
            out.push(
                format!("/processes/{i}/name"),
                "name must not be empty".to_string(),
            );
        }
    }

    let mut indicator_ids: HashSet<IndicatorId> = HashSet::new();
    let mut indicator_codes: HashSet<IndicatorCode> = HashSet::new();
    for (i, indicator) in catalog.indicators.iter().enumerate() {
        if !indicator_ids.insert(indicator.id) {
            out.push(
                format!("/indicators/{i}"),
                format!("duplicate indicator id {}", indicator.id),
            );
        }
        if !indicator_codes.insert(indicator.code.clone()) {
            out.push(
                format!("/indicators/{i}/code"),
                format!("duplicate indicator code {}", indicator.code),
            );
        }
        if indicator.name.trim().is_empty() {
            out.push(
                format!("/indicators/{i}/name"),
                "name must not be empty".to_string(),
            );
        }

        match catalog.process_by_id(&indicator.process_id) {
            None => {
                out.push(
                    format!("/indicators/{i}/process_id"),
                    format!("references unknown process {}", indicator.process_id),
                );
            }
            Some(process) => {
                if indicator.code.prefix() != process.code.as_str() {
                    out.push(
                        format!("/indicators/{i}/code"),
                        format!(
                            "prefix {} does not match process code {}",
                            indicator.code.prefix(),
                            process.code
                        ),
                    );
                }
            }
        }

        if !indicator.target.is_finite() {
            out.push(
                format!("/indicators/{i}/target"),
                format!("target must be finite, got {}", indicator.target),
            );
        }

        if let Err(err) = indicator.threshold_band() {
            out.push(format!("/indicators/{i}/thresholds"), err.to_string());
        }
    }

    out
}

// ─── Tests ───────────────────────────────────────────────────────────

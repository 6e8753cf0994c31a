// crates/bundle-gate-cli/src/report.rs
// ============================================================================
// Module: Suite Report Rendering
// Description: Serializable per-case and per-suite validation outcomes.
// Purpose: Back the `--format json` output surface of the check command.
// Dependencies: bundle-gate-core, serde
// ============================================================================

//! ## Overview
//! The check command collects one [`CaseReport`] per validation case into a
//! [`SuiteReport`]. Reports are plain data: the binary renders them as JSON
//! or as localized text lines.
//! Invariants:
//! - Case order matches suite order (sorted by display name).
//! - `failed` always equals the number of cases with a failure status.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bundle_gate_core::ValidationError;
use serde::Serialize;

// ============================================================================
// SECTION: Report Types
// ============================================================================

/// Outcome status of one validation case.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// The resource passed every applicable check.
    Pass,
    /// The resource failed one check.
    Fail,
}

/// Outcome of one validation case.
///
/// # Invariants
/// - `kind` and `message` are present exactly when `status` is
///   [`CaseStatus::Fail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Case identifier (the resource display name).
    pub name: String,
    /// Pass/fail status.
    pub status: CaseStatus,
    /// Stable failure-kind label, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable diagnostic, when failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CaseReport {
    /// Builds a case report from a case name and its validation outcome.
    #[must_use]
    pub fn from_outcome(name: impl Into<String>, outcome: &Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self {
                name: name.into(),
                status: CaseStatus::Pass,
                kind: None,
                message: None,
            },
            Err(error) => Self {
                name: name.into(),
                status: CaseStatus::Fail,
                kind: Some(error.kind().to_string()),
                message: Some(error.to_string()),
            },
        }
    }

    /// Returns true when the case failed.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self.status, CaseStatus::Fail)
    }
}

/// Aggregated outcome of one suite run.
///
/// # Invariants
/// - `total` equals `cases.len()`; `failed` counts failing cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Scanned root directory, as supplied by the caller.
    pub root: String,
    /// Extension filter applied by the scan.
    pub extension: String,
    /// Whether the encoding-ambiguity check was active.
    pub encoding_check: bool,
    /// Total number of validation cases.
    pub total: usize,
    /// Number of failing cases.
    pub failed: usize,
    /// Per-case outcomes in suite order.
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    /// Assembles a suite report from per-case outcomes.
    #[must_use]
    pub fn new(
        root: impl Into<String>,
        extension: impl Into<String>,
        encoding_check: bool,
        cases: Vec<CaseReport>,
    ) -> Self {
        let failed = cases.iter().filter(|case| case.is_fail()).count();
        Self {
            root: root.into(),
            extension: extension.into(),
            encoding_check,
            total: cases.len(),
            failed,
            cases,
        }
    }

    /// Returns true when no case failed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        self.failed == 0
    }
}

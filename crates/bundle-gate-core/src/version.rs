// crates/bundle-gate-core/src/version.rs
// ============================================================================
// Module: Platform Version Gate
// Description: Dotted numeric platform versions and the encoding-check gate.
// Purpose: Decide whether the encoding-ambiguity check applies at all.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Hosts at or above [`encoding_gate_threshold`] read property bundles as
//! UTF-8 consistently, which removes the ambiguity class the encoding check
//! guards against. The gate is an explicit input: callers supply the platform
//! version they probed (or `None` when it is undeterminable) instead of the
//! validator querying host state.
//! Invariants:
//! - An unknown version and a version at or above the threshold both mean the
//!   encoding check is skipped.
//! - Versions compare numerically segment-wise; trailing zero segments are
//!   insignificant (`2.0` equals `2`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// SECTION: Version Type
// ============================================================================

/// Dotted numeric platform version, totally ordered.
///
/// # Invariants
/// - Contains at least one segment.
/// - Trailing zero segments are stripped at construction so equality and
///   ordering are purely numeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion {
    /// Numeric version segments, most significant first.
    segments: Vec<u64>,
}

impl PlatformVersion {
    /// Creates a version from raw segments.
    ///
    /// Trailing zero segments are stripped; an all-zero input collapses to a
    /// single zero segment.
    #[must_use]
    pub fn new(segments: &[u64]) -> Self {
        let mut segments = segments.to_vec();
        while segments.len() > 1 && segments.last() == Some(&0) {
            segments.pop();
        }
        if segments.is_empty() {
            segments.push(0);
        }
        Self {
            segments,
        }
    }

    /// Returns true when this version is strictly older than `other`.
    #[must_use]
    pub fn is_older_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

/// Errors returned when parsing a platform version from text.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The input contained no segments.
    #[error("platform version is empty")]
    Empty,
    /// A segment was not a base-10 number.
    #[error("platform version segment is not numeric: {0}")]
    NonNumericSegment(String),
}

impl FromStr for PlatformVersion {
    type Err = VersionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(VersionParseError::Empty);
        }
        let mut segments = Vec::new();
        for raw in value.split('.') {
            let segment = raw
                .parse::<u64>()
                .map_err(|_| VersionParseError::NonNumericSegment(raw.to_string()))?;
            segments.push(segment);
        }
        Ok(Self::new(&segments))
    }
}

// ============================================================================
// SECTION: Encoding Gate
// ============================================================================

/// Returns the fixed version at or above which hosts read bundles as UTF-8.
#[must_use]
pub fn encoding_gate_threshold() -> PlatformVersion {
    PlatformVersion::new(&[2, 357])
}

/// Decides whether the encoding-ambiguity check applies for a host version.
///
/// Returns true exactly when a version is known and strictly older than
/// [`encoding_gate_threshold`].
#[must_use]
pub fn encoding_gate(version: Option<&PlatformVersion>) -> bool {
    version.is_some_and(|version| version.is_older_than(&encoding_gate_threshold()))
}

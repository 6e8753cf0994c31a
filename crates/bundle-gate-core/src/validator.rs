// crates/bundle-gate-core/src/validator.rs
// ============================================================================
// Module: Resource Validator
// Description: Single-resource validation combining encoding and parse checks.
// Purpose: Produce at most one descriptive failure per resource per run.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`validate`] runs the check sequence for one resource: read the raw bytes
//! once, optionally run the encoding-ambiguity check, then parse entries
//! while rejecting duplicate keys. Validation stops at the first detected
//! failure; failures never cross resource boundaries.
//!
//! The duplicate check is an explicit pre-insertion existence check on the
//! accumulating mapping. It fires on the first repeat occurrence of any key,
//! whether or not the stored and incoming values are textually identical:
//! redefinition itself is the defect, not divergence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::encoding::detect_ambiguity;
use crate::parser::ParseError;
use crate::parser::parse_entries;
use crate::resource::Resource;

// ============================================================================
// SECTION: Validator Options
// ============================================================================

/// Options controlling the per-resource check sequence.
///
/// # Invariants
/// - `check_encoding` is an explicit input derived from the platform version
///   gate (or forced by the caller); the default is to skip the check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Run the encoding-ambiguity check before parsing.
    pub check_encoding: bool,
}

impl ValidatorOptions {
    /// Creates options with the encoding check explicitly set.
    #[must_use]
    pub const fn new(check_encoding: bool) -> Self {
        Self {
            check_encoding,
        }
    }
}

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Failures detected while validating one resource.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Each variant names the resource it applies to.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The same key was assigned twice in one resource.
    #[error("Two values for `{key}` (`{previous}` vs. `{value}`) in {resource}")]
    DuplicateKey {
        /// Display name of the defective resource.
        resource: String,
        /// The redefined key.
        key: String,
        /// Value stored before the repeat occurrence.
        previous: String,
        /// Value carried by the repeat occurrence.
        value: String,
    },
    /// The raw bytes decode validly under both UTF-8 and ISO-8859-1.
    #[error(
        "{resource} is valid UTF-8 and valid ISO-8859-1. To avoid problems when auto-detecting \
         the encoding, use the lowest common denominator of ASCII encoding and express non-ASCII \
         characters with escape sequences."
    )]
    EncodingAmbiguity {
        /// Display name of the defective resource.
        resource: String,
    },
    /// The property decoder could not parse the content at all.
    #[error("failed to parse {resource}: {source}")]
    Malformed {
        /// Display name of the defective resource.
        resource: String,
        /// The decoder's own diagnostic, surfaced as-is.
        #[source]
        source: ParseError,
    },
    /// The resource bytes could not be read.
    #[error("failed to read {resource}: {source}")]
    Read {
        /// Display name of the unreadable resource.
        resource: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ValidationError {
    /// Returns a stable label for the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateKey {
                ..
            } => "duplicate_key",
            Self::EncodingAmbiguity {
                ..
            } => "encoding_ambiguity",
            Self::Malformed {
                ..
            } => "malformed",
            Self::Read {
                ..
            } => "read",
        }
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates one resource, stopping at the first detected failure.
///
/// The check sequence is: one scoped read of the raw bytes, the gated
/// encoding-ambiguity check, then duplicate-rejecting entry accumulation.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first defect found.
pub fn validate(resource: &Resource, options: ValidatorOptions) -> Result<(), ValidationError> {
    let bytes = resource.read_bytes().map_err(|source| ValidationError::Read {
        resource: resource.name().to_string(),
        source,
    })?;

    if options.check_encoding && detect_ambiguity(&bytes).is_ambiguous() {
        return Err(ValidationError::EncodingAmbiguity {
            resource: resource.name().to_string(),
        });
    }

    let entries = parse_entries(&bytes).map_err(|source| ValidationError::Malformed {
        resource: resource.name().to_string(),
        source,
    })?;

    let mut accumulated: BTreeMap<String, String> = BTreeMap::new();
    for entry in entries {
        if let Some(previous) = accumulated.get(&entry.key) {
            return Err(ValidationError::DuplicateKey {
                resource: resource.name().to_string(),
                key: entry.key,
                previous: previous.clone(),
                value: entry.value,
            });
        }
        accumulated.insert(entry.key, entry.value);
    }
    Ok(())
}

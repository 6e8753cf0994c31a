// crates/bundle-gate-core/src/suite.rs
// ============================================================================
// Module: Validation Suite Builder
// Description: One independently runnable validation case per resource.
// Purpose: Turn enumerated resources into isolated pass/fail cases.
// Dependencies: crate::resource, crate::validator
// ============================================================================

//! ## Overview
//! The suite builder consumes enumerated resources and produces one
//! [`ValidationCase`] per resource. Cases own their resource and options,
//! share no mutable state, and may be executed in parallel by an external
//! runner. Enumerator failures must abort suite construction before this
//! builder runs; there is no partial or degraded suite.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::resource::Resource;
use crate::validator::ValidationError;
use crate::validator::ValidatorOptions;
use crate::validator::validate;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// File extension of property-style resources.
pub const PROPERTIES_EXTENSION: &str = "properties";

// ============================================================================
// SECTION: Validation Cases
// ============================================================================

/// One independently runnable validation case bound to a single resource.
///
/// # Invariants
/// - Owns exactly one resource and one options snapshot.
/// - Running the case twice on an unchanged resource yields the same verdict.
#[derive(Debug, Clone)]
pub struct ValidationCase {
    /// The resource this case validates.
    resource: Resource,
    /// Check-sequence options for this case.
    options: ValidatorOptions,
}

impl ValidationCase {
    /// Creates a case bound to one resource.
    #[must_use]
    pub const fn new(resource: Resource, options: ValidatorOptions) -> Self {
        Self {
            resource,
            options,
        }
    }

    /// Returns the case identifier (the resource display name).
    #[must_use]
    pub fn name(&self) -> &str {
        self.resource.name()
    }

    /// Runs the validation sequence for this case.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] detected in the resource.
    pub fn run(&self) -> Result<(), ValidationError> {
        validate(&self.resource, self.options)
    }
}

// ============================================================================
// SECTION: Suite Builder
// ============================================================================

/// Builds validation cases from enumerated resources.
///
/// # Invariants
/// - Produces exactly one case per resource, in enumeration order.
/// - Cases are independent; no state is shared between them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteBuilder {
    /// Options applied to every case in the suite.
    options: ValidatorOptions,
}

impl SuiteBuilder {
    /// Creates a builder applying `options` to every case.
    #[must_use]
    pub const fn new(options: ValidatorOptions) -> Self {
        Self {
            options,
        }
    }

    /// Builds one case per enumerated resource.
    #[must_use]
    pub fn build<I>(&self, resources: I) -> Vec<ValidationCase>
    where
        I: IntoIterator<Item = Resource>,
    {
        resources
            .into_iter()
            .map(|resource| ValidationCase::new(resource, self.options))
            .collect()
    }
}

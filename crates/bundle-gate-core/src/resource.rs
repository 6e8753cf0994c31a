// crates/bundle-gate-core/src/resource.rs
// ============================================================================
// Module: Bundle Gate Resources
// Description: Readable resource handles paired with display names.
// Purpose: Carry one property bundle through a single validation pass.
// Dependencies: Standard library filesystem and I/O utilities.
// ============================================================================

//! ## Overview
//! A [`Resource`] is an opaque handle to readable bytes plus the display name
//! used as the validation case identifier. Resources are immutable once
//! created and owned by a single case for the lifetime of one run.
//! Invariants:
//! - [`Resource::read_bytes`] performs one full scoped read per call; the
//!   handle is released on every exit path.
//! - The display name is stable for the lifetime of the handle.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

// ============================================================================
// SECTION: Resource Types
// ============================================================================

/// Backing content of a resource handle.
///
/// # Invariants
/// - [`ResourceContent::File`] defers the read until validation runs.
/// - [`ResourceContent::Memory`] is used by tests and embedded callers.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceContent {
    /// Resource backed by a filesystem path.
    File(PathBuf),
    /// Resource backed by in-memory bytes.
    Memory(Vec<u8>),
}

/// One property bundle under validation.
///
/// # Invariants
/// - Immutable once created; not shared across concurrent runs.
/// - The display name identifies the resource in every failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Display name used as the validation case identifier.
    name: String,
    /// Backing content of the resource.
    content: ResourceContent,
}

impl Resource {
    /// Creates a file-backed resource with the given display name.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: ResourceContent::File(path.into()),
        }
    }

    /// Creates an in-memory resource with the given display name.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: ResourceContent::Memory(bytes.into()),
        }
    }

    /// Returns the display name of the resource.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the full raw byte content of the resource.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when a file-backed resource cannot be
    /// read.
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        match &self.content {
            ResourceContent::File(path) => fs::read(path),
            ResourceContent::Memory(bytes) => Ok(bytes.clone()),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

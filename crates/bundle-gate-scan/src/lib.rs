// crates/bundle-gate-scan/src/lib.rs
// ============================================================================
// Module: Bundle Gate Resource Enumerator
// Description: Recursive directory scan with an extension filter.
// Purpose: Map each matching file to a locator and a display name.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The enumerator walks a root directory and yields one entry per regular
//! file whose extension matches the filter: a filesystem locator paired with
//! a `/`-separated display name relative to the root.
//! Invariants:
//! - Never two entries for the same resource.
//! - Any I/O failure during the walk is a hard error; files are never
//!   silently skipped.
//! - Output order is deterministic (sorted by display name), though callers
//!   must not rely on ordering.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Scan Types
// ============================================================================

/// One enumerated resource: locator plus display name.
///
/// # Invariants
/// - `display_name` is the `/`-separated path of `path` relative to the scan
///   root and is unique within one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedResource {
    /// Filesystem locator of the resource.
    pub path: PathBuf,
    /// Display name relative to the scan root.
    pub display_name: String,
}

/// Errors returned by the enumerator.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant names the path it applies to.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is not a directory.
    #[error("scan root is not a directory: {path}")]
    NotADirectory {
        /// The offending root path.
        path: PathBuf,
    },
    /// A directory could not be opened for reading.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// The unreadable directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A directory entry could not be read.
    #[error("failed to read an entry of directory {path}: {source}")]
    ReadEntry {
        /// Directory whose entry failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// File metadata could not be inspected.
    #[error("failed to inspect {path}: {source}")]
    Metadata {
        /// The uninspectable path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A matched path could not be made relative to the scan root.
    #[error("matched path escapes the scan root: {path}")]
    OutsideRoot {
        /// The offending path.
        path: PathBuf,
    },
}

// ============================================================================
// SECTION: Scan
// ============================================================================

/// Enumerates every file under `root` whose extension matches `extension`.
///
/// The extension comparison is case-sensitive and excludes the dot. Results
/// are sorted by display name.
///
/// # Errors
///
/// Returns a [`ScanError`] when the root is not a directory or any step of
/// the walk fails; no partial result is produced.
pub fn scan(root: &Path, extension: &str) -> Result<Vec<ScannedResource>, ScanError> {
    let root_metadata = fs::metadata(root).map_err(|source| ScanError::Metadata {
        path: root.to_path_buf(),
        source,
    })?;
    if !root_metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut matches: BTreeMap<String, PathBuf> = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(directory) = pending.pop() {
        let entries = fs::read_dir(&directory).map_err(|source| ScanError::ReadDir {
            path: directory.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadEntry {
                path: directory.clone(),
                source,
            })?;
            let path = entry.path();
            let metadata = fs::metadata(&path).map_err(|source| ScanError::Metadata {
                path: path.clone(),
                source,
            })?;
            if metadata.is_dir() {
                pending.push(path);
            } else if metadata.is_file() && matches_extension(&path, extension) {
                let display_name = display_name(root, &path)?;
                matches.insert(display_name, path);
            }
        }
    }

    Ok(matches
        .into_iter()
        .map(|(display_name, path)| ScannedResource {
            path,
            display_name,
        })
        .collect())
}

/// Returns true when the path carries the requested extension.
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(extension)
}

/// Builds the `/`-separated display name of `path` relative to `root`.
fn display_name(root: &Path, path: &Path) -> Result<String, ScanError> {
    let relative = path.strip_prefix(root).map_err(|_| ScanError::OutsideRoot {
        path: path.to_path_buf(),
    })?;
    let mut name = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return Err(ScanError::OutsideRoot {
                path: path.to_path_buf(),
            });
        };
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(&part.to_string_lossy());
    }
    Ok(name)
}

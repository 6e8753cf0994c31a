// crates/bundle-gate-cli/src/config.rs
// ============================================================================
// Module: CLI Configuration
// Description: Strict TOML configuration loading for the bundle-gate binary.
// Purpose: Supply scan and encoding-gate settings with fail-closed parsing.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is optional: with no file, every setting falls back to its
//! built-in default. When a file is supplied, loading is strict — path and
//! size limits, UTF-8 requirement, unknown keys rejected — and the loaded
//! values are validated before use.
//! Invariants:
//! - Loading either returns a fully validated configuration or an error;
//!   there is no partially applied configuration.
//! - Unknown keys are rejected rather than ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use bundle_gate_core::PlatformVersion;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted length of a config path.
const MAX_CONFIG_PATH_CHARS: usize = 4096;
/// Maximum accepted length of a single config path component.
const MAX_CONFIG_PATH_COMPONENT_CHARS: usize = 255;
/// Maximum accepted size of a config file.
const MAX_CONFIG_BYTES: u64 = 1024 * 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Scan settings.
///
/// # Invariants
/// - `extension` excludes the dot and never contains path separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    /// File extension of property-style resources (defaults to `properties`).
    pub extension: Option<String>,
}

/// Encoding-gate settings.
///
/// # Invariants
/// - An absent `platform_version` means the gate is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodingSection {
    /// Probed host platform version, when determinable.
    pub platform_version: Option<String>,
}

/// Root configuration for the bundle-gate binary.
///
/// # Invariants
/// - Always validated before use; see [`BundleGateConfig::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleGateConfig {
    /// Scan settings.
    #[serde(default)]
    pub scan: ScanSection,
    /// Encoding-gate settings.
    #[serde(default)]
    pub encoding: EncodingSection,
}

/// Errors returned while loading or validating configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config path is longer than the accepted limit.
    #[error("config path exceeds max length ({length} > {limit})")]
    PathTooLong {
        /// Observed path length.
        length: usize,
        /// Accepted limit.
        limit: usize,
    },
    /// One config path component is longer than the accepted limit.
    #[error("config path component too long ({length} > {limit})")]
    PathComponentTooLong {
        /// Observed component length.
        length: usize,
        /// Accepted limit.
        limit: usize,
    },
    /// The config file could not be inspected or read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is larger than the accepted limit.
    #[error("config file exceeds size limit ({size} > {limit})")]
    TooLarge {
        /// Observed file size in bytes.
        size: u64,
        /// Accepted limit in bytes.
        limit: u64,
    },
    /// The config file is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The loaded values are semantically invalid.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl BundleGateConfig {
    /// Loads configuration from an optional path.
    ///
    /// With no path the built-in defaults are returned. With a path the file
    /// is loaded strictly and validated.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any guard or the parse fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        check_path(path)?;
        let size = fs::metadata(path)?.len();
        if size > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge {
                size,
                limit: MAX_CONFIG_BYTES,
            });
        }
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the loaded values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a setting is semantically
    /// unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(extension) = &self.scan.extension {
            if extension.is_empty() {
                return Err(ConfigError::Invalid("scan.extension must not be empty".to_string()));
            }
            if extension.contains(['.', '/', '\\']) {
                return Err(ConfigError::Invalid(
                    "scan.extension must not contain dots or path separators".to_string(),
                ));
            }
        }
        if let Some(version) = &self.encoding.platform_version {
            PlatformVersion::from_str(version).map_err(|error| {
                ConfigError::Invalid(format!("encoding.platform_version: {error}"))
            })?;
        }
        Ok(())
    }
}

/// Enforces path length guards before touching the filesystem.
fn check_path(path: &Path) -> Result<(), ConfigError> {
    let length = path.as_os_str().len();
    if length > MAX_CONFIG_PATH_CHARS {
        return Err(ConfigError::PathTooLong {
            length,
            limit: MAX_CONFIG_PATH_CHARS,
        });
    }
    for component in path.components() {
        let component_length = component.as_os_str().len();
        if component_length > MAX_CONFIG_PATH_COMPONENT_CHARS {
            return Err(ConfigError::PathComponentTooLong {
                length: component_length,
                limit: MAX_CONFIG_PATH_COMPONENT_CHARS,
            });
        }
    }
    Ok(())
}

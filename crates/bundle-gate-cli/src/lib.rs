// crates/bundle-gate-cli/src/lib.rs
// ============================================================================
// Module: Bundle Gate CLI Library
// Description: Shared CLI building blocks for the bundle-gate binary.
// Purpose: Expose localization, configuration, and report rendering.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Library surface of the Bundle Gate CLI: the message catalog and [`t!`]
//! macro, strict TOML configuration loading, and the serializable suite
//! report emitted by `--format json`. The binary in `main.rs` wires these
//! pieces to the scanner and the validation core.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod i18n;
pub mod report;

#[cfg(test)]
mod tests;

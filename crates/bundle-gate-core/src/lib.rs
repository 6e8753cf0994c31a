// crates/bundle-gate-core/src/lib.rs
// ============================================================================
// Module: Bundle Gate Core
// Description: Property bundle validation engine and suite construction.
// Purpose: Detect duplicate keys and charset-encoding ambiguity in bundles.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Bundle Gate core turns each property-style resource into an independent
//! validation case. A case fails when the resource redefines a key or when its
//! raw bytes decode validly under both UTF-8 and ISO-8859-1 while failing
//! strict ASCII decoding (so an automatic charset sniffer could pick either
//! interpretation and silently corrupt the other).
//! Invariants:
//! - Each case owns exactly one resource read and one accumulating mapping.
//! - A resource produces at most one failure per run; validation stops at the
//!   first detected defect.
//! - The encoding check runs only when explicitly enabled through
//!   [`ValidatorOptions`]; an undeterminable platform version means skip.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod encoding;
pub mod parser;
pub mod resource;
pub mod suite;
pub mod validator;
pub mod version;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use encoding::Ambiguity;
pub use encoding::Charset;
pub use encoding::EncodingVerdict;
pub use encoding::classify;
pub use encoding::detect_ambiguity;
pub use parser::ParseError;
pub use parser::PropertyEntry;
pub use parser::parse_entries;
pub use resource::Resource;
pub use suite::PROPERTIES_EXTENSION;
pub use suite::SuiteBuilder;
pub use suite::ValidationCase;
pub use validator::ValidationError;
pub use validator::ValidatorOptions;
pub use validator::validate;
pub use version::PlatformVersion;
pub use version::VersionParseError;
pub use version::encoding_gate;
pub use version::encoding_gate_threshold;

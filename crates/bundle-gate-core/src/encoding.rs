// crates/bundle-gate-core/src/encoding.rs
// ============================================================================
// Module: Charset Classification
// Description: Strict per-charset decode verdicts and ambiguity detection.
// Purpose: Flag bytes that decode validly under more than one candidate charset.
// Dependencies: Standard library UTF-8 validation.
// ============================================================================

//! ## Overview
//! The encoding check classifies the raw bytes of a resource against three
//! fixed candidates: strict 7-bit ASCII, strict UTF-8, and strict ISO-8859-1.
//! "Strict" means any malformed or unmappable byte sequence fails the
//! candidate outright; there is no substitution or silent recovery.
//!
//! ISO-8859-1 assigns a character to every possible byte value, so any valid
//! UTF-8 sequence is trivially decodable as ISO-8859-1 too. The dangerous
//! zone is exactly the set of non-ASCII byte strings valid under both: an
//! automatic charset sniffer could legitimately choose either interpretation
//! and silently corrupt content encoded in the other.
//! Invariants:
//! - Verdicts are computed independently per candidate.
//! - Pure ASCII content short-circuits as unambiguous under every candidate.

// ============================================================================
// SECTION: Charset Types
// ============================================================================

/// Candidate charsets evaluated by the encoding check.
///
/// # Invariants
/// - The set of candidates is fixed; verdicts are computed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Strict 7-bit ASCII; any byte >= 0x80 fails.
    Ascii,
    /// Strict UTF-8; any malformed sequence fails.
    Utf8,
    /// Strict ISO-8859-1; every byte value has an assigned character.
    Iso88591,
}

/// Per-charset classification of a byte string.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingVerdict {
    /// The bytes decode cleanly under the charset.
    Clean,
    /// The bytes contain invalid or unmappable sequences for the charset.
    Invalid,
}

impl EncodingVerdict {
    /// Returns true for a clean decode.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Outcome of the ambiguity check over all candidates.
///
/// # Invariants
/// - [`Ambiguity::Ambiguous`] implies the bytes are not pure ASCII and decode
///   cleanly under both UTF-8 and ISO-8859-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ambiguity {
    /// Pure ASCII content; unambiguous under every candidate.
    PureAscii,
    /// At most one non-ASCII candidate decodes the bytes cleanly.
    Unambiguous,
    /// Both UTF-8 and ISO-8859-1 decode the bytes cleanly.
    Ambiguous,
}

impl Ambiguity {
    /// Returns true when the bytes admit more than one interpretation.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        matches!(self, Self::Ambiguous)
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

/// Classifies a byte string under one candidate charset.
#[must_use]
pub fn classify(bytes: &[u8], charset: Charset) -> EncodingVerdict {
    let clean = match charset {
        Charset::Ascii => bytes.is_ascii(),
        Charset::Utf8 => std::str::from_utf8(bytes).is_ok(),
        // ISO-8859-1 maps all 256 byte values to assigned characters.
        Charset::Iso88591 => true,
    };
    if clean { EncodingVerdict::Clean } else { EncodingVerdict::Invalid }
}

/// Detects charset-encoding ambiguity in raw resource bytes.
///
/// Pure ASCII content passes immediately. Otherwise the bytes are classified
/// independently under strict UTF-8 and strict ISO-8859-1; only a clean
/// decode under both is ambiguous. Bytes clean under at most one candidate
/// (including neither) are unambiguous.
#[must_use]
pub fn detect_ambiguity(bytes: &[u8]) -> Ambiguity {
    if classify(bytes, Charset::Ascii).is_clean() {
        return Ambiguity::PureAscii;
    }
    let utf8 = classify(bytes, Charset::Utf8);
    let iso = classify(bytes, Charset::Iso88591);
    if utf8.is_clean() && iso.is_clean() {
        Ambiguity::Ambiguous
    } else {
        Ambiguity::Unambiguous
    }
}

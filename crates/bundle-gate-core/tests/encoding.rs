// crates/bundle-gate-core/tests/encoding.rs
// ============================================================================
// Module: Charset Classification Tests
// Description: Verifies strict per-charset verdicts and ambiguity detection.
// Purpose: Pin the tri-state classification and the ambiguity zone.
// ============================================================================

//! ## Overview
//! Pins the strict decode verdicts for the three candidate charsets and the
//! ambiguity outcomes over raw byte strings, including a lone ISO-8859-1
//! byte and a two-byte UTF-8 sequence.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use bundle_gate_core::Ambiguity;
use bundle_gate_core::Charset;
use bundle_gate_core::EncodingVerdict;
use bundle_gate_core::classify;
use bundle_gate_core::detect_ambiguity;

#[test]
fn ascii_bytes_classify_clean_under_every_candidate() {
    let bytes = b"greeting=hello\n";
    assert_eq!(classify(bytes, Charset::Ascii), EncodingVerdict::Clean);
    assert_eq!(classify(bytes, Charset::Utf8), EncodingVerdict::Clean);
    assert_eq!(classify(bytes, Charset::Iso88591), EncodingVerdict::Clean);
}

#[test]
fn high_bytes_fail_strict_ascii() {
    assert_eq!(classify(&[0x80], Charset::Ascii), EncodingVerdict::Invalid);
    assert_eq!(classify(&[0xE9], Charset::Ascii), EncodingVerdict::Invalid);
}

#[test]
fn lone_continuation_byte_fails_strict_utf8() {
    assert_eq!(classify(&[0xE9], Charset::Utf8), EncodingVerdict::Invalid);
}

#[test]
fn every_byte_value_classifies_clean_under_iso_8859_1() {
    let all_bytes: Vec<u8> = (0u8 ..= 0xFF).collect();
    assert_eq!(classify(&all_bytes, Charset::Iso88591), EncodingVerdict::Clean);
}

#[test]
fn pure_ascii_is_unambiguous() {
    assert_eq!(detect_ambiguity(b"greeting=hello\n"), Ambiguity::PureAscii);
}

#[test]
fn empty_bytes_are_pure_ascii() {
    assert_eq!(detect_ambiguity(b""), Ambiguity::PureAscii);
}

#[test]
fn lone_iso_byte_is_unambiguous() {
    // 0xE9 is a valid ISO-8859-1 character but an invalid standalone UTF-8
    // continuation byte, so only one interpretation exists.
    assert_eq!(detect_ambiguity(&[0xE9]), Ambiguity::Unambiguous);
    assert!(!detect_ambiguity(&[0xE9]).is_ambiguous());
}

#[test]
fn two_byte_utf8_sequence_is_ambiguous() {
    // 0xC3 0xA9 is UTF-8 for "é" and simultaneously a valid two-character
    // ISO-8859-1 string.
    assert_eq!(detect_ambiguity(&[0xC3, 0xA9]), Ambiguity::Ambiguous);
    assert!(detect_ambiguity(&[0xC3, 0xA9]).is_ambiguous());
}

#[test]
fn non_ascii_utf8_text_is_ambiguous() {
    assert_eq!(detect_ambiguity("greeting=café\n".as_bytes()), Ambiguity::Ambiguous);
}

#[test]
fn latin1_text_with_invalid_utf8_is_unambiguous() {
    assert_eq!(detect_ambiguity(b"greeting=caf\xE9\n"), Ambiguity::Unambiguous);
}

#[test]
fn classification_is_idempotent() {
    let bytes: &[u8] = &[0xC3, 0xA9];
    assert_eq!(detect_ambiguity(bytes), detect_ambiguity(bytes));
}

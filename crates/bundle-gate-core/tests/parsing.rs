// crates/bundle-gate-core/tests/parsing.rs
// ============================================================================
// Module: Property Parser Tests
// Description: Verifies logical-line assembly, separators, and escapes.
// Purpose: Ensure the decoder matches conventional property-file syntax.
// ============================================================================

//! ## Overview
//! Exercises the property decoder across separator forms, comments,
//! continuations, escape sequences, and the malformed inputs it must reject.

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

use bundle_gate_core::ParseError;
use bundle_gate_core::PropertyEntry;
use bundle_gate_core::parse_entries;

fn entry(key: &str, value: &str) -> PropertyEntry {
    PropertyEntry {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn parses_equals_colon_and_whitespace_separators() {
    let entries = parse_entries(b"a=1\nb:2\nc 3\n").unwrap();
    assert_eq!(entries, vec![entry("a", "1"), entry("b", "2"), entry("c", "3")]);
}

#[test]
fn elides_whitespace_around_separators() {
    let entries = parse_entries(b"greeting   =   hello\nfarewell\t:\tbye\n").unwrap();
    assert_eq!(entries, vec![entry("greeting", "hello"), entry("farewell", "bye")]);
}

#[test]
fn preserves_entry_order() {
    let entries = parse_entries(b"z=26\na=1\nm=13\n").unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn skips_blank_and_comment_lines() {
    let entries = parse_entries(b"\n# comment\n! also a comment\n   \nkey=value\n").unwrap();
    assert_eq!(entries, vec![entry("key", "value")]);
}

#[test]
fn comment_only_input_yields_no_entries() {
    let entries = parse_entries(b"# one\n! two\n").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn empty_input_yields_no_entries() {
    assert!(parse_entries(b"").unwrap().is_empty());
}

#[test]
fn key_without_separator_has_empty_value() {
    let entries = parse_entries(b"standalone\n").unwrap();
    assert_eq!(entries, vec![entry("standalone", "")]);
}

#[test]
fn key_with_trailing_separator_has_empty_value() {
    let entries = parse_entries(b"empty=\n").unwrap();
    assert_eq!(entries, vec![entry("empty", "")]);
}

#[test]
fn continuation_joins_lines_and_trims_leading_whitespace() {
    let entries = parse_entries(b"fruits=apple, \\\n    banana, \\\n    cherry\n").unwrap();
    assert_eq!(entries, vec![entry("fruits", "apple, banana, cherry")]);
}

#[test]
fn escaped_backslash_is_not_a_continuation() {
    let entries = parse_entries(b"path=C:\\\\temp\nnext=1\n").unwrap();
    assert_eq!(entries, vec![entry("path", "C:\\temp"), entry("next", "1")]);
}

#[test]
fn continuation_line_starting_with_hash_is_data() {
    let entries = parse_entries(b"key=one \\\n#two\n").unwrap();
    assert_eq!(entries, vec![entry("key", "one #two")]);
}

#[test]
fn comment_line_is_never_continued() {
    let entries = parse_entries(b"# trailing backslash \\\nkey=value\n").unwrap();
    assert_eq!(entries, vec![entry("key", "value")]);
}

#[test]
fn handles_crlf_line_endings() {
    let entries = parse_entries(b"a=1\r\nb=2\r\n").unwrap();
    assert_eq!(entries, vec![entry("a", "1"), entry("b", "2")]);
}

#[test]
fn handles_bare_carriage_returns() {
    let entries = parse_entries(b"a=1\rb=2\r").unwrap();
    assert_eq!(entries, vec![entry("a", "1"), entry("b", "2")]);
}

#[test]
fn decodes_simple_escapes() {
    let entries = parse_entries(b"key=tab\\there\\nnewline\n").unwrap();
    assert_eq!(entries, vec![entry("key", "tab\there\nnewline")]);
}

#[test]
fn decodes_unicode_escapes() {
    let entries = parse_entries(b"greeting=caf\\u00e9\n").unwrap();
    assert_eq!(entries, vec![entry("greeting", "caf\u{e9}")]);
}

#[test]
fn decodes_surrogate_pair_escapes() {
    let entries = parse_entries(b"emoji=\\uD83D\\uDE00\n").unwrap();
    assert_eq!(entries, vec![entry("emoji", "\u{1F600}")]);
}

#[test]
fn escaped_space_belongs_to_the_key() {
    let entries = parse_entries(b"two\\ words=value\n").unwrap();
    assert_eq!(entries, vec![entry("two words", "value")]);
}

#[test]
fn unknown_escape_drops_the_backslash() {
    let entries = parse_entries(b"key=\\q\n").unwrap();
    assert_eq!(entries, vec![entry("key", "q")]);
}

#[test]
fn decodes_latin1_bytes_when_not_utf8() {
    // 0xE9 alone is not valid UTF-8; the decoder falls back to ISO-8859-1.
    let entries = parse_entries(b"accent=caf\xE9\n").unwrap();
    assert_eq!(entries, vec![entry("accent", "caf\u{e9}")]);
}

#[test]
fn decodes_utf8_bytes_directly() {
    let entries = parse_entries("accent=café\n".as_bytes()).unwrap();
    assert_eq!(entries, vec![entry("accent", "caf\u{e9}")]);
}

#[test]
fn rejects_truncated_unicode_escape() {
    let error = parse_entries(b"key=\\u00").unwrap_err();
    assert!(matches!(error, ParseError::MalformedUnicodeEscape { .. }));
}

#[test]
fn rejects_non_hex_unicode_escape() {
    let error = parse_entries(b"key=\\uzzzz\n").unwrap_err();
    assert!(matches!(error, ParseError::MalformedUnicodeEscape { .. }));
}

#[test]
fn rejects_unpaired_high_surrogate() {
    let error = parse_entries(b"key=\\uD83D\n").unwrap_err();
    assert!(matches!(error, ParseError::UnpairedSurrogate { .. }));
}

#[test]
fn rejects_lone_low_surrogate() {
    let error = parse_entries(b"key=\\uDE00\n").unwrap_err();
    assert!(matches!(error, ParseError::UnpairedSurrogate { .. }));
}

#[test]
fn rejects_dangling_continuation_at_end_of_input() {
    let error = parse_entries(b"key=value\\").unwrap_err();
    assert!(matches!(error, ParseError::DanglingContinuation { .. }));
}

#[test]
fn error_reports_the_starting_line() {
    let error = parse_entries(b"ok=1\nbad=\\uqqqq\n").unwrap_err();
    assert_eq!(error, ParseError::MalformedUnicodeEscape {
        line: 2,
        found: "q".to_string(),
    });
}

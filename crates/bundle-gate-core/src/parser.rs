// crates/bundle-gate-core/src/parser.rs
// ============================================================================
// Module: Property Bundle Parser
// Description: Logical-line decoder for property-style resources.
// Purpose: Yield key/value entries in file order with strict escape handling.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! The parser decodes a resource's bytes into a sequence of logical lines:
//! blank lines, comment lines (`#` or `!`), continuations of the previous
//! logical line (trailing unescaped backslash, leading whitespace trimmed),
//! or `key=value` / `key:value` / whitespace-separated declarations. Entries
//! are yielded in file order.
//!
//! Bytes are decoded as UTF-8 when valid and ISO-8859-1 otherwise, matching
//! the conventional resource-bundle reading discipline. Escape sequences
//! (`\t`, `\n`, `\f`, `\r`, `\\`, `\uXXXX`) are processed in keys and
//! values; a backslash before any other character drops the backslash.
//! Invariants:
//! - Comment lines cannot be continued into; continuation lines are never
//!   reinterpreted as comments.
//! - Malformed `\u` escapes, unpaired surrogates, and a continuation at end
//!   of input are hard parse errors, never silently recovered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Parser Types
// ============================================================================

/// One decoded key/value pair from a resource, in file order.
///
/// # Invariants
/// - Escape sequences are fully decoded; the pair carries final text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    /// Decoded entry key.
    pub key: String,
    /// Decoded entry value.
    pub value: String,
}

/// Errors returned by the property decoder.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Line numbers are 1-based and refer to the natural line where the
///   offending logical line starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `\u` escape was truncated or contained a non-hex digit.
    #[error("malformed \\u escape on line {line}: expected four hex digits, found `{found}`")]
    MalformedUnicodeEscape {
        /// Natural line where the logical line starts.
        line: usize,
        /// The offending escape remainder.
        found: String,
    },
    /// A `\u` escape produced a surrogate code unit with no valid partner.
    #[error("unpaired UTF-16 surrogate \\u{code:04X} on line {line}")]
    UnpairedSurrogate {
        /// Natural line where the logical line starts.
        line: usize,
        /// The unpaired surrogate code unit.
        code: u16,
    },
    /// A line continuation reached end of input with no line to continue to.
    #[error("line continuation at end of input (line {line})")]
    DanglingContinuation {
        /// Natural line carrying the trailing backslash.
        line: usize,
    },
}

/// A logical line with the natural line number where it starts.
#[derive(Debug)]
struct LogicalLine {
    /// Assembled logical line content, still escaped.
    text: String,
    /// 1-based natural line number of the first segment.
    line: usize,
}

// ============================================================================
// SECTION: Entry Decoding
// ============================================================================

/// Decodes a resource's bytes into property entries in file order.
///
/// # Errors
///
/// Returns a [`ParseError`] when an escape sequence is malformed or a line
/// continuation reaches end of input.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<PropertyEntry>, ParseError> {
    let text = decode_text(bytes);
    let mut entries = Vec::new();
    for logical in logical_lines(&text)? {
        let (raw_key, raw_value) = split_key_value(&logical.text);
        let key = unescape(&raw_key, logical.line)?;
        let value = unescape(&raw_value, logical.line)?;
        entries.push(PropertyEntry {
            key,
            value,
        });
    }
    Ok(entries)
}

/// Decodes raw bytes as UTF-8 when valid, ISO-8859-1 otherwise.
fn decode_text(bytes: &[u8]) -> String {
    std::str::from_utf8(bytes)
        .map_or_else(|_| bytes.iter().map(|&byte| char::from(byte)).collect(), str::to_string)
}

/// Returns true for the blank characters recognized by the line syntax.
const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0c')
}

/// Strips leading blank characters from a natural line.
fn strip_leading_blank(line: &str) -> &str {
    line.trim_start_matches(is_blank)
}

/// Returns true when the segment ends with an odd run of backslashes.
fn ends_in_continuation(segment: &str) -> bool {
    let mut trailing = 0usize;
    for ch in segment.chars().rev() {
        if ch == '\\' {
            trailing += 1;
        } else {
            break;
        }
    }
    trailing % 2 == 1
}

/// Assembles logical lines from natural lines.
///
/// Blank and comment lines are skipped; a trailing unescaped backslash joins
/// the next natural line with its leading whitespace trimmed.
fn logical_lines(text: &str) -> Result<Vec<LogicalLine>, ParseError> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let naturals: Vec<&str> = normalized.split('\n').collect();
    let mut lines = Vec::new();
    let mut index = 0usize;
    while index < naturals.len() {
        let start_line = index + 1;
        let mut segment = strip_leading_blank(naturals[index]);
        if segment.is_empty() {
            index += 1;
            continue;
        }
        if segment.starts_with('#') || segment.starts_with('!') {
            index += 1;
            continue;
        }
        let mut logical = String::new();
        loop {
            if ends_in_continuation(segment) {
                logical.push_str(&segment[.. segment.len() - 1]);
                let continued_from = index + 1;
                index += 1;
                if index >= naturals.len() {
                    return Err(ParseError::DanglingContinuation {
                        line: continued_from,
                    });
                }
                segment = strip_leading_blank(naturals[index]);
            } else {
                logical.push_str(segment);
                break;
            }
        }
        lines.push(LogicalLine {
            text: logical,
            line: start_line,
        });
        index += 1;
    }
    Ok(lines)
}

/// Splits a logical line into raw (still escaped) key and value halves.
///
/// The key ends at the first unescaped `=`, `:`, or blank; blanks around the
/// separator are elided, and a whitespace-terminated key may be followed by
/// one explicit `=` or `:` separator.
fn split_key_value(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();
    let mut key_end = chars.len();
    let mut index = 0usize;
    while index < chars.len() {
        let ch = chars[index];
        if ch == '\\' {
            index += 2;
            continue;
        }
        if ch == '=' || ch == ':' || is_blank(ch) {
            key_end = index;
            break;
        }
        index += 1;
    }
    let raw_key: String = chars[.. key_end].iter().collect();
    let mut cursor = key_end;
    if cursor < chars.len() && (chars[cursor] == '=' || chars[cursor] == ':') {
        cursor += 1;
    } else {
        while cursor < chars.len() && is_blank(chars[cursor]) {
            cursor += 1;
        }
        if cursor < chars.len() && (chars[cursor] == '=' || chars[cursor] == ':') {
            cursor += 1;
        }
    }
    while cursor < chars.len() && is_blank(chars[cursor]) {
        cursor += 1;
    }
    let raw_value: String = chars[cursor ..].iter().collect();
    (raw_key, raw_value)
}

// ============================================================================
// SECTION: Escape Decoding
// ============================================================================

/// Returns true for a UTF-16 high surrogate code unit.
const fn is_high_surrogate(code: u16) -> bool {
    matches!(code, 0xD800 ..= 0xDBFF)
}

/// Returns true for a UTF-16 low surrogate code unit.
const fn is_low_surrogate(code: u16) -> bool {
    matches!(code, 0xDC00 ..= 0xDFFF)
}

/// Reads four hex digits at `start`, returning the code unit and next index.
fn read_unicode_escape(
    chars: &[char],
    start: usize,
    line: usize,
) -> Result<(u16, usize), ParseError> {
    let mut code = 0u32;
    for offset in 0 .. 4 {
        let Some(&ch) = chars.get(start + offset) else {
            return Err(ParseError::MalformedUnicodeEscape {
                line,
                found: chars[start.min(chars.len()) ..].iter().collect(),
            });
        };
        let Some(digit) = ch.to_digit(16) else {
            return Err(ParseError::MalformedUnicodeEscape {
                line,
                found: chars[start .. start + offset + 1].iter().collect(),
            });
        };
        code = code * 16 + digit;
    }
    let code = u16::try_from(code).map_err(|_| ParseError::MalformedUnicodeEscape {
        line,
        found: chars[start .. start + 4].iter().collect(),
    })?;
    Ok((code, start + 4))
}

/// Decodes escape sequences in a raw key or value half.
///
/// Recognized escapes are `\t`, `\n`, `\f`, `\r`, `\\`, and `\uXXXX`; a
/// backslash before any other character drops the backslash. Surrogate code
/// units must pair into a valid scalar value.
fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut index = 0usize;
    while index < chars.len() {
        let ch = chars[index];
        if ch != '\\' {
            out.push(ch);
            index += 1;
            continue;
        }
        index += 1;
        let Some(&escaped) = chars.get(index) else {
            break;
        };
        index += 1;
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\x0c'),
            'r' => out.push('\r'),
            'u' => {
                let (code, next) = read_unicode_escape(&chars, index, line)?;
                index = next;
                if is_high_surrogate(code) {
                    if chars.get(index) == Some(&'\\') && chars.get(index + 1) == Some(&'u') {
                        let (low, after) = read_unicode_escape(&chars, index + 2, line)?;
                        if !is_low_surrogate(low) {
                            return Err(ParseError::UnpairedSurrogate {
                                line,
                                code,
                            });
                        }
                        index = after;
                        let scalar = 0x10000u32
                            + (u32::from(code - 0xD800) << 10)
                            + u32::from(low - 0xDC00);
                        match char::from_u32(scalar) {
                            Some(combined) => out.push(combined),
                            None => {
                                return Err(ParseError::UnpairedSurrogate {
                                    line,
                                    code,
                                });
                            }
                        }
                    } else {
                        return Err(ParseError::UnpairedSurrogate {
                            line,
                            code,
                        });
                    }
                } else if is_low_surrogate(code) {
                    return Err(ParseError::UnpairedSurrogate {
                        line,
                        code,
                    });
                } else {
                    match char::from_u32(u32::from(code)) {
                        Some(decoded) => out.push(decoded),
                        None => {
                            return Err(ParseError::UnpairedSurrogate {
                                line,
                                code,
                            });
                        }
                    }
                }
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

//! Line parser for the flat `key = value` file format.
//!
//! # Format
//!
//! ```text
//! # This is a comment
//! key1 = value1
//! key2=value2
//! ```
//!
//! Each line is trimmed, then classified:
//!
//! - empty after trimming → blank, skipped
//! - starts with `#` → comment, skipped
//! - contains `=` → split on the **first** `=`; both halves are trimmed.
//!   Anything after the first `=` (including more `=` signs or a `#`) is
//!   part of the value.
//! - no `=`, or an empty key → malformed, skipped
//!
//! Skipped lines never produce errors.  A key that accidentally contains `=`
//! is therefore truncated at that `=` without warning; the only trace of it
//! is a `trace!` event.

use std::collections::HashMap;

use tracing::trace;

/// Classification of a single line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// No `=` separator, or nothing before it.
    Malformed,
    Entry { key: &'a str, value: &'a str },
}

/// Classifies one raw line.  Trailing `\r` is removed by the trim.
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }
    let Some((lhs, rhs)) = line.split_once('=') else {
        return Line::Malformed;
    };
    let key = lhs.trim();
    if key.is_empty() {
        return Line::Malformed;
    }
    Line::Entry {
        key,
        value: rhs.trim(),
    }
}

/// Parses a whole document into a key → value map.
///
/// Lines are split on `\n`.  Later entries overwrite earlier ones with the
/// same key.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for (lineno, raw) in content.split('\n').enumerate() {
        match parse_line(raw) {
            Line::Blank | Line::Comment => {}
            Line::Malformed => {
                trace!(line = lineno + 1, "skipping line without a key/value pair");
            }
            Line::Entry { key, value } => {
                if properties
                    .insert(key.to_string(), value.to_string())
                    .is_some()
                {
                    trace!(line = lineno + 1, key, "duplicate key overrides earlier value");
                }
            }
        }
    }

    properties
}

// ── Tests ─────────────────────────────────────────────────────────────────────

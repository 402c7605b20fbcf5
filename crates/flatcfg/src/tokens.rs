//! Boolean token tables.
//!
//! A stored value is a boolean only if it matches one of these words exactly,
//! ignoring ASCII case.  Partial matches (`"enab"`, `"yes please"`) are not
//! recognised.

/// Words that read as `true`.
pub const TRUE_TOKENS: [&str; 6] = ["on", "true", "yes", "enable", "enabled", "1"];

/// Words that read as `false`.
pub const FALSE_TOKENS: [&str; 6] = ["off", "false", "no", "disable", "disabled", "0"];

/// Interprets `value` as a boolean token.
///
/// Case folding is ASCII-only; non-ASCII look-alikes never match.
///
/// Returns `None` when `value` is in neither table.
pub fn parse_bool_token(value: &str) -> Option<bool> {
    if TRUE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        return Some(true);
    }
    if FALSE_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        return Some(false);
    }
    None
}

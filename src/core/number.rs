//! Numeric token parsing
//!
//! Accepts the same float spellings a pipeline author would pass on a
//! container command line: decimal and exponent forms, `inf`/`nan`, and
//! underscores between digits.

use crate::error::{AddError, Result};
use std::borrow::Cow;

/// Parse a command-line token into a floating-point number
///
/// Surrounding whitespace is ignored. Underscores are accepted only as
/// separators between two ASCII digits (`1_000.5`).
pub fn parse_number(token: &str) -> Result<f64> {
    let trimmed = token.trim();

    let normalized =
        strip_digit_separators(trimmed).ok_or_else(|| AddError::invalid_number(token))?;

    normalized
        .parse::<f64>()
        .map_err(|_| AddError::invalid_number(token))
}

/// Remove digit-separating underscores, or `None` if one is misplaced
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }

    let bytes = token.as_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'_' {
            continue;
        }

        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }

    Some(Cow::Owned(token.replace('_', "")))
}

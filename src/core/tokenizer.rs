//! Show folder name tokenizer.
//!
//! Release names mostly use `.` as separator, some use spaces. A space
//! separated name needs more tokens before it is worth classifying.

use crate::{Error, Result};

/// Minimum token count when splitting on `.`.
pub const DOT_MIN_TOKENS: usize = 3;

/// Minimum token count when splitting on spaces.
pub const SPACE_MIN_TOKENS: usize = 5;

/// Split a raw folder name into ordered tokens.
///
/// Tries `.` first and falls back to spaces when that gives fewer than
/// [`DOT_MIN_TOKENS`] tokens. Fails with [`Error::NameSyntax`] when the space
/// split gives fewer than [`SPACE_MIN_TOKENS`].
pub fn tokenize(name: &str) -> Result<Vec<&str>> {
    let tokens: Vec<&str> = name.split('.').collect();
    if tokens.len() >= DOT_MIN_TOKENS {
        return Ok(tokens);
    }

    let tokens: Vec<&str> = name.split(' ').collect();
    if tokens.len() >= SPACE_MIN_TOKENS {
        return Ok(tokens);
    }

    Err(Error::NameSyntax(name.to_string()))
}

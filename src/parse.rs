//! Whole-string numeric validation
//!
//! Converts a string into a bounded signed integer with an unambiguous
//! outcome: the exact value, or one of two named failures. Malformed input
//! and out-of-range input are never conflated, and `0` is always a real
//! parse result, never a failure sentinel.

use std::num::IntErrorKind;

use crate::error::{Error, Result};

/// Parse `text` as a base-10 signed integer, consuming the entire string.
///
/// Accepted grammar: an optional leading `+` or `-` followed by one or more
/// ASCII digits, nothing else. No trimming is performed; an empty string, a
/// bare sign, or any embedded non-digit fails with [`Error::NotANumber`].
/// A syntactically valid value whose magnitude does not fit in `i64` fails
/// with [`Error::OutOfRange`].
///
/// Pure function: no side effects, deterministic for a given input.
///
/// # Example
///
/// ```
/// use devreg::error::Error;
/// use devreg::parse::parse;
///
/// assert_eq!(parse("-42"), Ok(-42));
/// assert_eq!(parse("12a"), Err(Error::not_a_number("12a")));
/// ```
pub fn parse(text: &str) -> Result<i64> {
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(Error::out_of_range(text))
            }
            _ => Err(Error::not_a_number(text)),
        },
    }
}

/// Read an environment variable and validate its value with [`parse`].
///
/// Returns `None` when the variable is unset or not valid Unicode, keeping
/// "absent" distinct from "present but invalid": a set-but-malformed value
/// is `Some(Err(..))`, never silently dropped.
pub fn parse_env(var: &str) -> Option<Result<i64>> {
    std::env::var(var).ok().map(|value| parse(&value))
}

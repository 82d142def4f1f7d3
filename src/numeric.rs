//! Numeric token validation

use crate::error::{CronError, Reason, Result};

/// Parse an unsigned decimal integer token.
///
/// Anything that is not all ASCII digits fails with
/// [`CronError::InvalidExpression`] carrying the token; callers never get a
/// silent "not a number".
pub fn parse_numeric(token: &str) -> Result<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CronError::invalid(token, Reason::NotNumeric));
    }
    // All digits but too large for u32
    token
        .parse::<u32>()
        .map_err(|_| CronError::invalid(token, Reason::OutOfRange))
}

/// `min <= number <= max`
pub fn is_between(number: u32, min: u32, max: u32) -> bool {
    min <= number && number <= max
}

/// A `[start, end]` pair is ascending and entirely inside `[min, max]`.
pub fn is_step_range_valid(range: [u32; 2], min: u32, max: u32) -> bool {
    let [start, end] = range;
    start <= end && is_between(start, min, max) && is_between(end, min, max)
}

use std::time::Duration;

use crate::UnitError;

/// Parse a duration string such as `12s`, `3m`, `5h` or `1h 30m`.
///
/// Accepts the `humantime` grammar: a sequence of integer/unit pairs with
/// units from `ns` up to `y`. Note that `m` is minutes and `M` is months.
///
/// # Errors
///
/// Returns [`UnitError::InvalidDuration`] carrying the input and the
/// parser's reason.
pub fn parse_duration(input: &str) -> Result<Duration, UnitError> {
    humantime::parse_duration(input.trim()).map_err(|e| UnitError::InvalidDuration {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

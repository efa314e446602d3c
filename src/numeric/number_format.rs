// ============================================================================
// Number Formatting
// Helpers adapters use around raw exchange numbers and precision metadata
// ============================================================================

use super::precise::Precise;
use num_bigint::BigInt;

/// Render a binary float as a plain decimal string (never exponent notation).
///
/// Uses the shortest representation that round-trips, so `0.1` renders as
/// `"0.1"` and `1e-8` as `"0.00000001"`. Returns `None` for NaN and infinities.
pub fn number_to_string(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        // Covers -0.0
        return Some("0".to_string());
    }
    Some(format!("{}", value))
}

/// Number of significant fractional digits in a tick-size string.
///
/// `"0.00100"` -> 3, `"1e-8"` -> 8, `"10"` -> 0. Returns `None` if the string
/// is not a decimal literal.
pub fn precision_from_string(tick: &str) -> Option<u32> {
    tick.parse::<Precise>().ok().map(|p| p.reduce().scale())
}

/// The tick size for a scale: `10^(-scale)` as a decimal string.
///
/// `parse_precision(8)` is `"0.00000001"`, `parse_precision(0)` is `"1"`.
pub fn parse_precision(scale: u32) -> String {
    Precise::new(BigInt::from(1u8), scale).to_string()
}

/// Treat empty and numerically-zero strings as absent.
///
/// Exchanges often send `"0"` for "not applicable" (no fee charged, no
/// trigger price). Strings that do not parse are passed through untouched.
pub fn omit_zero(value: Option<&str>) -> Option<&str> {
    let value = non_blank(value)?;
    match value.parse::<Precise>() {
        Ok(p) if p.is_zero() => None,
        _ => Some(value),
    }
}

/// A present but empty or whitespace-only operand counts as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

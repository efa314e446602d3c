// ============================================================================
// Scale Primitives
// Human decimal <-> exchange scaled-integer wire value
// ============================================================================

use crate::interfaces::NumericInput;
use crate::numeric::{NumericError, NumericResult, Precise, MAX_EXPONENT};

/// Outcome of scaling a human value onto the wire.
#[derive(Debug, Clone)]
pub(crate) struct Scaled {
    /// Integer wire value, truncated toward zero
    pub wire: Precise,
    /// False when fractional digits were dropped
    pub exact: bool,
}

fn scale_places(scale: u32) -> NumericResult<i32> {
    if scale > MAX_EXPONENT {
        return Err(NumericError::ScaleOutOfRange {
            scale,
            max: MAX_EXPONENT,
        });
    }
    i32::try_from(scale).map_err(|_| NumericError::Overflow)
}

pub(crate) fn scale_to_wire(value: &Precise, scale: u32) -> NumericResult<Scaled> {
    let shifted = value.shift_scale(-scale_places(scale)?)?;
    let wire = shifted.truncate(0);
    let exact = wire == shifted;
    Ok(Scaled { wire, exact })
}

pub(crate) fn scale_from_wire(wire: &Precise, scale: u32) -> NumericResult<Precise> {
    Ok(wire.shift_scale(scale_places(scale)?)?.reduce())
}

/// `value × 10^scale` as an integer string, for an outgoing request.
///
/// Digits beyond `scale` fractional places are truncated toward zero, never
/// rounded: `"1.239"` at scale 2 is `"123"` and `"-1.239"` is `"-123"`.
///
/// # Errors
/// Returns `Parse` if `value` is not a decimal literal, and
/// `ScaleOutOfRange` if `scale` exceeds [`MAX_EXPONENT`].
///
/// # Example
/// ```
/// use exchange_numeric::scale::to_scaled_integer;
///
/// assert_eq!(to_scaled_integer("123.45", 2).unwrap(), "12345");
/// assert_eq!(to_scaled_integer("1", 8).unwrap(), "100000000");
/// ```
pub fn to_scaled_integer<V: NumericInput + ?Sized>(value: &V, scale: u32) -> NumericResult<String> {
    Ok(scale_to_wire(&value.to_precise()?, scale)?.wire.to_string())
}

/// `wire × 10^(-scale)` as a canonical decimal string, for an incoming response.
///
/// An absent or blank wire value is unknown (`Ok(None)`), so optional
/// exchange fields flow through parsing without special cases.
///
/// # Errors
/// Returns `Parse` if `wire` is present but not a decimal literal, and
/// `ScaleOutOfRange` if `scale` exceeds [`MAX_EXPONENT`].
///
/// # Example
/// ```
/// use exchange_numeric::scale::from_scaled_integer;
///
/// assert_eq!(from_scaled_integer(Some("12345"), 2).unwrap().as_deref(), Some("123.45"));
/// assert_eq!(from_scaled_integer::<str>(None, 8).unwrap(), None);
/// ```
pub fn from_scaled_integer<V: NumericInput + ?Sized>(
    wire: Option<&V>,
    scale: u32,
) -> NumericResult<Option<String>> {
    let Some(wire) = wire.filter(|w| !w.is_blank()) else {
        return Ok(None);
    };
    Ok(Some(scale_from_wire(&wire.to_precise()?, scale)?.to_string()))
}

// ============================================================================
// Precision Rounding
// Fit a value to a market's precision before it goes into a request
// ============================================================================
//
// A market states precision in one of three ways:
// - DecimalPlaces: number of fractional digits ("2" keeps 1.23)
// - SignificantDigits: number of leading digits ("4" keeps 123.4)
// - TickSize: the step itself ("0.5" keeps 123.5)
//
// Rounding is either truncation toward zero or half away from zero, and is
// symmetric around zero in every counting mode.

use super::errors::{NumericError, NumericResult};
use super::number_format::non_blank;
use super::precise::{Precise, MAX_EXPONENT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How digits beyond the precision are dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward zero
    Truncate,
    /// Half away from zero
    #[default]
    Round,
}

/// What the precision number counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CountingMode {
    /// Fractional digits; negative values round to tens, hundreds, ...
    #[default]
    DecimalPlaces,
    /// Digits counted from the first non-zero one
    SignificantDigits,
    /// The precision is the step size itself
    TickSize,
}

/// Whether the rendered string is padded out to the precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaddingMode {
    /// Canonical form, trailing zeros removed
    #[default]
    NoPadding,
    /// Exactly as many fractional digits as the precision allows
    PadWithZero,
}

fn invalid(precision: &Precise) -> NumericError {
    NumericError::InvalidPrecision {
        precision: precision.to_string(),
    }
}

/// Precision as a whole number of places, bounded like any decimal shift.
fn whole_places(precision: &Precise) -> NumericResult<i32> {
    let places = precision.to_i64().ok_or_else(|| invalid(precision))?;
    if places.unsigned_abs() > u64::from(MAX_EXPONENT) {
        return Err(NumericError::ScaleOutOfRange {
            scale: u32::try_from(places.unsigned_abs()).unwrap_or(u32::MAX),
            max: MAX_EXPONENT,
        });
    }
    i32::try_from(places).map_err(|_| NumericError::Overflow)
}

/// Power of ten of the leading digit (123.4 -> 2, 0.005 -> -3). Zero has none.
fn leading_exponent(value: &Precise) -> Option<i64> {
    if value.is_zero() {
        return None;
    }
    let reduced = value.reduce();
    let digits = i64::try_from(reduced.mantissa().magnitude().to_string().len()).ok()?;
    Some(digits - 1 - i64::from(reduced.scale()))
}

/// Fractional places that keep `digits` significant digits of `value`.
fn significant_places(value: &Precise, digits: i32) -> NumericResult<Option<i32>> {
    let Some(lead) = leading_exponent(value) else {
        return Ok(None);
    };
    let places = i64::from(digits) - 1 - lead;
    i32::try_from(places)
        .map(Some)
        .map_err(|_| NumericError::Overflow)
}

impl Precise {
    /// Keep `places` fractional digits. Negative `places` rounds to
    /// `10^|places|`: `1234.5` at -2 is `1200`.
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `|places|` exceeds [`MAX_EXPONENT`].
    pub fn quantize(&self, places: i32, rounding: RoundingMode) -> NumericResult<Precise> {
        let shifted = self.shift_scale(-places)?;
        let mut whole = shifted.truncate(0);
        if rounding == RoundingMode::Round {
            let fraction = (&shifted - &whole).abs();
            if fraction.shift_scale(-1)? >= Precise::from_integer(5) {
                whole = &whole + &Precise::from_integer(self.signum());
            }
        }
        Ok(whole.shift_scale(places)?.reduce())
    }

    /// Fit `self` to `precision` as counted by `counting`.
    ///
    /// `precision` is a place count for `DecimalPlaces`, a digit count for
    /// `SignificantDigits` and the step for `TickSize`.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` for a fractional place or digit count, a
    /// negative digit count or a tick that is not positive, and
    /// `ScaleOutOfRange` for place counts beyond [`MAX_EXPONENT`].
    ///
    /// # Example
    /// ```
    /// use exchange_numeric::numeric::{CountingMode, Precise, RoundingMode};
    ///
    /// let price: Precise = "123.456".parse().unwrap();
    /// let tick: Precise = "0.5".parse().unwrap();
    /// let fitted = price
    ///     .decimal_to_precision(RoundingMode::Round, &tick, CountingMode::TickSize)
    ///     .unwrap();
    /// assert_eq!(fitted.to_string(), "123.5");
    /// ```
    pub fn decimal_to_precision(
        &self,
        rounding: RoundingMode,
        precision: &Precise,
        counting: CountingMode,
    ) -> NumericResult<Precise> {
        match counting {
            CountingMode::DecimalPlaces => self.quantize(whole_places(precision)?, rounding),
            CountingMode::SignificantDigits => {
                let digits = whole_places(precision)?;
                if digits < 0 {
                    return Err(invalid(precision));
                }
                if digits == 0 {
                    return Ok(Precise::zero());
                }
                match significant_places(self, digits)? {
                    Some(places) => self.quantize(places, rounding),
                    None => Ok(Precise::zero()),
                }
            },
            CountingMode::TickSize => {
                if !precision.is_positive() {
                    return Err(invalid(precision));
                }
                let mut steps = self.checked_div(precision, 0)?;
                if rounding == RoundingMode::Round {
                    let remainder = self.checked_rem(precision)?.abs();
                    if &remainder + &remainder >= *precision {
                        steps = &steps + &Precise::from_integer(self.signum());
                    }
                }
                Ok((&steps * precision).reduce())
            },
        }
    }
}

/// Fractional digits shown under `PadWithZero` for an already fitted value.
fn padded_places(
    fitted: &Precise,
    precision: &Precise,
    counting: CountingMode,
) -> NumericResult<u32> {
    let places = match counting {
        CountingMode::DecimalPlaces => whole_places(precision)?,
        CountingMode::SignificantDigits => {
            significant_places(fitted, whole_places(precision)?)?.unwrap_or(0)
        },
        CountingMode::TickSize => return Ok(precision.reduce().scale()),
    };
    Ok(u32::try_from(places.max(0)).unwrap_or(0))
}

/// String form of [`Precise::decimal_to_precision`] for request building.
///
/// An absent or blank value or precision is unknown (`Ok(None)`).
///
/// # Errors
/// Returns `Parse` for malformed literals and the errors of
/// [`Precise::decimal_to_precision`].
///
/// # Example
/// ```
/// use exchange_numeric::numeric::{decimal_to_precision, CountingMode, PaddingMode, RoundingMode};
///
/// let price = decimal_to_precision(
///     Some("1.2"),
///     RoundingMode::Round,
///     Some("4"),
///     CountingMode::DecimalPlaces,
///     PaddingMode::PadWithZero,
/// )
/// .unwrap();
/// assert_eq!(price.as_deref(), Some("1.2000"));
/// ```
pub fn decimal_to_precision(
    value: Option<&str>,
    rounding: RoundingMode,
    precision: Option<&str>,
    counting: CountingMode,
    padding: PaddingMode,
) -> NumericResult<Option<String>> {
    let (Some(value), Some(precision)) = (non_blank(value), non_blank(precision)) else {
        return Ok(None);
    };
    let value: Precise = value.parse()?;
    let precision: Precise = precision.parse()?;
    let fitted = value.decimal_to_precision(rounding, &precision, counting)?;
    let rendered = match padding {
        PaddingMode::NoPadding => fitted.to_string(),
        PaddingMode::PadWithZero => {
            fitted.to_fixed_string(padded_places(&fitted, &precision, counting)?)
        },
    };
    Ok(Some(rendered))
}

/// Order price rounded to the nearest `tick`.
pub fn price_to_precision(price: Option<&str>, tick: Option<&str>) -> NumericResult<Option<String>> {
    decimal_to_precision(
        price,
        RoundingMode::Round,
        tick,
        CountingMode::TickSize,
        PaddingMode::NoPadding,
    )
}

/// Order amount truncated to a whole number of `step`s, so it never exceeds
/// what the caller holds.
pub fn amount_to_precision(amount: Option<&str>, step: Option<&str>) -> NumericResult<Option<String>> {
    decimal_to_precision(
        amount,
        RoundingMode::Truncate,
        step,
        CountingMode::TickSize,
        PaddingMode::NoPadding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::CountingMode::{DecimalPlaces, SignificantDigits, TickSize};
    use super::RoundingMode::{Round, Truncate};

    fn fit(value: &str, rounding: RoundingMode, precision: &str, counting: CountingMode) -> String {
        decimal_to_precision(
            Some(value),
            rounding,
            Some(precision),
            counting,
            PaddingMode::NoPadding,
        )
        .unwrap()
        .unwrap()
    }

    fn padded(value: &str, rounding: RoundingMode, precision: &str, counting: CountingMode) -> String {
        decimal_to_precision(
            Some(value),
            rounding,
            Some(precision),
            counting,
            PaddingMode::PadWithZero,
        )
        .unwrap()
        .unwrap()
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(fit("1.235", Round, "2", DecimalPlaces), "1.24");
        assert_eq!(fit("1.234", Round, "2", DecimalPlaces), "1.23");
        assert_eq!(fit("-1.235", Round, "2", DecimalPlaces), "-1.24");
        assert_eq!(fit("1.239", Truncate, "2", DecimalPlaces), "1.23");
        assert_eq!(fit("-1.239", Truncate, "2", DecimalPlaces), "-1.23");
        assert_eq!(fit("0.5", Round, "0", DecimalPlaces), "1");
        assert_eq!(fit("-0.4", Round, "0", DecimalPlaces), "0");
        assert_eq!(fit("7", Round, "8", DecimalPlaces), "7");
    }

    #[test]
    fn test_negative_decimal_places() {
        assert_eq!(fit("1234.5", Round, "-2", DecimalPlaces), "1200");
        assert_eq!(fit("1250", Round, "-2", DecimalPlaces), "1300");
        assert_eq!(fit("-1250", Round, "-2", DecimalPlaces), "-1300");
        assert_eq!(fit("1299", Truncate, "-2", DecimalPlaces), "1200");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(fit("123.456", Round, "4", SignificantDigits), "123.5");
        assert_eq!(fit("123.456", Truncate, "4", SignificantDigits), "123.4");
        assert_eq!(fit("0.00012345", Round, "2", SignificantDigits), "0.00012");
        assert_eq!(fit("-0.0009876", Round, "2", SignificantDigits), "-0.00099");
        assert_eq!(fit("999", Round, "2", SignificantDigits), "1000");
        assert_eq!(fit("123456", Truncate, "2", SignificantDigits), "120000");
        assert_eq!(fit("0", Round, "3", SignificantDigits), "0");
        assert_eq!(fit("5", Round, "0", SignificantDigits), "0");
    }

    #[test]
    fn test_tick_size() {
        assert_eq!(fit("123.456", Round, "0.5", TickSize), "123.5");
        assert_eq!(fit("123.2", Round, "0.5", TickSize), "123");
        assert_eq!(fit("123.25", Round, "0.5", TickSize), "123.5");
        assert_eq!(fit("123.456", Truncate, "0.5", TickSize), "123");
        assert_eq!(fit("1.005", Round, "0.01", TickSize), "1.01");
        assert_eq!(fit("37", Round, "5", TickSize), "35");
        assert_eq!(fit("0.00000001", Truncate, "0.0001", TickSize), "0");
    }

    #[test]
    fn test_tick_size_negative_values_are_symmetric() {
        assert_eq!(fit("-123.3", Round, "0.5", TickSize), "-123.5");
        assert_eq!(fit("-123.2", Round, "0.5", TickSize), "-123");
        assert_eq!(fit("-123.25", Round, "0.5", TickSize), "-123.5");
        assert_eq!(fit("-123.456", Truncate, "0.5", TickSize), "-123");
    }

    #[test]
    fn test_padding() {
        assert_eq!(padded("1.2", Round, "4", DecimalPlaces), "1.2000");
        assert_eq!(padded("1234.5", Round, "-2", DecimalPlaces), "1200");
        assert_eq!(padded("1", Round, "0.010", TickSize), "1.00");
        assert_eq!(padded("123.456", Round, "0.5", TickSize), "123.5");
        assert_eq!(padded("0.0999", Round, "2", SignificantDigits), "0.10");
        assert_eq!(padded("999", Round, "2", SignificantDigits), "1000");
        assert_eq!(padded("-1.5", Truncate, "3", DecimalPlaces), "-1.500");
    }

    #[test]
    fn test_invalid_precision() {
        let call = |precision: &str, counting| {
            decimal_to_precision(
                Some("1.5"),
                Round,
                Some(precision),
                counting,
                PaddingMode::NoPadding,
            )
        };
        assert_eq!(
            call("0", TickSize),
            Err(NumericError::InvalidPrecision {
                precision: "0".to_string()
            })
        );
        assert_eq!(
            call("-0.5", TickSize),
            Err(NumericError::InvalidPrecision {
                precision: "-0.5".to_string()
            })
        );
        assert_eq!(
            call("1.5", DecimalPlaces),
            Err(NumericError::InvalidPrecision {
                precision: "1.5".to_string()
            })
        );
        assert_eq!(
            call("-1", SignificantDigits),
            Err(NumericError::InvalidPrecision {
                precision: "-1".to_string()
            })
        );
        assert_eq!(
            call("2000", DecimalPlaces),
            Err(NumericError::ScaleOutOfRange {
                scale: 2000,
                max: MAX_EXPONENT
            })
        );
        assert!(matches!(call("abc", DecimalPlaces), Err(NumericError::Parse { .. })));
    }

    #[test]
    fn test_unknown_inputs() {
        let pad = PaddingMode::NoPadding;
        assert_eq!(decimal_to_precision(None, Round, Some("2"), DecimalPlaces, pad), Ok(None));
        assert_eq!(decimal_to_precision(Some(""), Round, Some("2"), DecimalPlaces, pad), Ok(None));
        assert_eq!(decimal_to_precision(Some("1.5"), Round, None, TickSize, pad), Ok(None));
        assert_eq!(price_to_precision(Some(" "), Some("0.5")), Ok(None));
    }

    #[test]
    fn test_order_wrappers() {
        assert_eq!(
            price_to_precision(Some("27123.456"), Some("0.5")).unwrap().as_deref(),
            Some("27123.5")
        );
        assert_eq!(
            amount_to_precision(Some("0.123456789"), Some("0.0001")).unwrap().as_deref(),
            Some("0.1234")
        );
        assert_eq!(
            amount_to_precision(Some("-0.99999"), Some("0.001")).unwrap().as_deref(),
            Some("-0.999")
        );
    }

    #[test]
    fn test_quantize_on_precise() {
        let x: Precise = "2.675".parse().unwrap();
        assert_eq!(x.quantize(2, Round).unwrap().to_string(), "2.68");
        assert_eq!(x.quantize(2, Truncate).unwrap().to_string(), "2.67");
        assert!(matches!(
            x.quantize(1001, Round),
            Err(NumericError::ScaleOutOfRange { .. })
        ));
    }
}

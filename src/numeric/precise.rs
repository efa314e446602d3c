// ============================================================================
// Precise Decimal
// Exact decimal value: arbitrary-precision mantissa with a decimal-point offset
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::number_format::number_to_string;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// Largest exponent magnitude accepted in scientific notation (`1e-1000`),
/// and the largest decimal-point shift or division precision any operation
/// will perform.
pub const MAX_EXPONENT: u32 = 1_000;

/// Fractional digits kept by division when the caller does not choose.
pub const DEFAULT_DIV_PRECISION: u32 = 18;

/// 10^exponent
fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u8).pow(exponent)
}

fn check_shift(places: u32) -> NumericResult<()> {
    if places > MAX_EXPONENT {
        return Err(NumericError::ScaleOutOfRange {
            scale: places,
            max: MAX_EXPONENT,
        });
    }
    Ok(())
}

/// Number of trailing zero decimal digits (0 for zero itself).
fn trailing_zero_digits(value: &BigInt) -> u32 {
    if value.is_zero() {
        return 0;
    }
    let digits = value.magnitude().to_string();
    let zeros = digits.bytes().rev().take_while(|&b| b == b'0').count();
    u32::try_from(zeros).unwrap_or(u32::MAX)
}

/// Exact decimal number.
///
/// The value is `mantissa × 10^(-scale)`. Values are immutable: every
/// operation builds a new `Precise`, so instances can be shared freely
/// across threads and pipelines.
///
/// Arithmetic results are not reduced eagerly (`"1.50" + "1.50"` keeps scale
/// 2); equality, ordering, hashing and `Display` are all numeric, so the
/// representation never leaks.
///
/// # Example
/// ```
/// use exchange_numeric::numeric::Precise;
///
/// let a: Precise = "0.1".parse().unwrap();
/// let b: Precise = "0.2".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "0.3");
/// ```
#[derive(Clone)]
pub struct Precise {
    mantissa: BigInt,
    scale: u32,
}

impl Precise {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a mantissa and a count of fractional digits.
    #[inline]
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn one() -> Self {
        Self::new(BigInt::from(1u8), 0)
    }

    /// Create from an integer value.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value.into(), 0)
    }

    /// Create from a binary float via its shortest round-trip decimal form.
    ///
    /// # Errors
    /// Returns `Parse` for NaN and infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        number_to_string(value)
            .ok_or_else(|| NumericError::parse(&value.to_string()))?
            .parse()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of digits after the decimal point in this representation.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.mantissa.is_positive()
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> i32 {
        match self.mantissa.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// True when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.reduce().scale == 0
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Canonical form: no removable trailing zero after the point, and zero
    /// always at scale 0.
    pub fn reduce(&self) -> Self {
        if self.mantissa.is_zero() {
            return Self::zero();
        }
        let removable = trailing_zero_digits(&self.mantissa).min(self.scale);
        if removable == 0 {
            return self.clone();
        }
        Self::new(&self.mantissa / pow10(removable), self.scale - removable)
    }

    pub fn is_reduced(&self) -> bool {
        if self.mantissa.is_zero() {
            self.scale == 0
        } else {
            self.scale == 0 || trailing_zero_digits(&self.mantissa) == 0
        }
    }

    /// Multiply by `10^(-places)` exactly.
    ///
    /// Positive `places` moves the decimal point left (`"12345"` shifted by 2
    /// is `"123.45"`), negative moves it right.
    ///
    /// # Errors
    /// Returns `ScaleOutOfRange` if `|places|` exceeds [`MAX_EXPONENT`], and
    /// `Overflow` if the resulting scale does not fit in `u32`.
    pub fn shift_scale(&self, places: i32) -> NumericResult<Self> {
        check_shift(places.unsigned_abs())?;
        let target = i64::from(self.scale) + i64::from(places);
        if target >= 0 {
            let scale = u32::try_from(target).map_err(|_| NumericError::Overflow)?;
            Ok(Self::new(self.mantissa.clone(), scale))
        } else {
            let places = u32::try_from(target.unsigned_abs()).map_err(|_| NumericError::Overflow)?;
            Ok(Self::new(&self.mantissa * pow10(places), 0))
        }
    }

    /// Drop every digit beyond `decimals` fractional places, toward zero.
    pub fn truncate(&self, decimals: u32) -> Self {
        if self.scale <= decimals {
            return self.clone();
        }
        Self::new(&self.mantissa / pow10(self.scale - decimals), decimals)
    }

    /// Mantissa re-expressed at a scale at least as large as the current one.
    fn mantissa_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            return self.mantissa.clone();
        }
        &self.mantissa * pow10(scale - self.scale)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn abs(&self) -> Self {
        Self::new(self.mantissa.abs(), self.scale)
    }

    /// Division truncated toward zero after `precision` fractional digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, and `ScaleOutOfRange` if
    /// `precision` exceeds [`MAX_EXPONENT`].
    pub fn checked_div(&self, rhs: &Precise, precision: u32) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        check_shift(precision)?;
        // a/b × 10^p = (ma × 10^(sb + p)) / (mb × 10^sa)
        let shift = rhs
            .scale
            .checked_add(precision)
            .ok_or(NumericError::Overflow)?;
        let numerator = &self.mantissa * pow10(shift);
        let denominator = &rhs.mantissa * pow10(self.scale);
        Ok(Self::new(numerator / denominator, precision).reduce())
    }

    /// Exact remainder; the sign follows the dividend.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Precise) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let scale = self.scale.max(rhs.scale);
        Ok(Self::new(self.mantissa_at(scale) % rhs.mantissa_at(scale), scale))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Integer part, truncated toward zero.
    pub fn to_integer_string(&self) -> String {
        self.truncate(0).to_string()
    }

    /// Render with exactly `decimals` fractional digits, zero-padded.
    /// Digits beyond `decimals` are truncated toward zero.
    pub fn to_fixed_string(&self, decimals: u32) -> String {
        let truncated = self.truncate(decimals);
        render(&truncated.mantissa_at(decimals), decimals)
    }

    /// Exact conversion to i128; `None` if fractional or out of range.
    pub fn to_i128(&self) -> Option<i128> {
        let reduced = self.reduce();
        if reduced.scale != 0 {
            return None;
        }
        reduced.mantissa.to_i128()
    }

    /// Exact conversion to i64; `None` if fractional or out of range.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// Nearest binary float. Lossy; meant for display and unified numeric fields.
    pub fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

// ============================================================================
// Comparison and Hashing
// ============================================================================

impl PartialEq for Precise {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Precise {}

impl PartialOrd for Precise {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precise {
    fn cmp(&self, other: &Self) -> Ordering {
        let signs = self.signum().cmp(&other.signum());
        if signs != Ordering::Equal {
            return signs;
        }
        let scale = self.scale.max(other.scale);
        self.mantissa_at(scale).cmp(&other.mantissa_at(scale))
    }
}

impl Hash for Precise {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.mantissa.hash(state);
        reduced.scale.hash(state);
    }
}

impl Default for Precise {
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<'a> Add<&'a Precise> for &'a Precise {
    type Output = Precise;

    fn add(self, rhs: &'a Precise) -> Precise {
        let scale = self.scale.max(rhs.scale);
        Precise::new(self.mantissa_at(scale) + rhs.mantissa_at(scale), scale)
    }
}

impl<'a> Sub<&'a Precise> for &'a Precise {
    type Output = Precise;

    fn sub(self, rhs: &'a Precise) -> Precise {
        let scale = self.scale.max(rhs.scale);
        Precise::new(self.mantissa_at(scale) - rhs.mantissa_at(scale), scale)
    }
}

impl<'a> Mul<&'a Precise> for &'a Precise {
    type Output = Precise;

    fn mul(self, rhs: &'a Precise) -> Precise {
        Precise::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }
}

impl Add for Precise {
    type Output = Precise;

    fn add(self, rhs: Precise) -> Precise {
        &self + &rhs
    }
}

impl Sub for Precise {
    type Output = Precise;

    fn sub(self, rhs: Precise) -> Precise {
        &self - &rhs
    }
}

impl Mul for Precise {
    type Output = Precise;

    fn mul(self, rhs: Precise) -> Precise {
        &self * &rhs
    }
}

impl Neg for &Precise {
    type Output = Precise;

    fn neg(self) -> Precise {
        Precise::new(-&self.mantissa, self.scale)
    }
}

impl Neg for Precise {
    type Output = Precise;

    fn neg(self) -> Precise {
        Precise::new(-self.mantissa, self.scale)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// `mantissa × 10^(-scale)` with exactly `scale` fractional digits.
fn render(mantissa: &BigInt, scale: u32) -> String {
    let sign = if mantissa.is_negative() { "-" } else { "" };
    let digits = mantissa.magnitude().to_string();
    let scale = scale as usize;
    if scale == 0 {
        return format!("{}{}", sign, digits);
    }
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{}{}.{}", sign, int_part, frac_part)
}

impl fmt::Display for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reduced = self.reduce();
        f.write_str(&render(&reduced.mantissa, reduced.scale))
    }
}

impl fmt::Debug for Precise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Precise({}, mantissa={}, scale={})",
            self, self.mantissa, self.scale
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_exponent(s: &str) -> Option<i32> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !all_digits(digits) {
        return None;
    }
    let magnitude: u32 = digits.parse().ok()?;
    if magnitude > MAX_EXPONENT {
        return None;
    }
    let magnitude = i32::try_from(magnitude).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl std::str::FromStr for Precise {
    type Err = NumericError;

    /// Parse a decimal literal.
    ///
    /// # Examples
    /// - "123.45", "-0.001", "+7"
    /// - ".5" -> 0.5, "5." -> 5
    /// - "1.5e-8" -> 0.000000015
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (number, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent =
                    parse_exponent(&body[pos + 1..]).ok_or_else(|| NumericError::parse(input))?;
                (&body[..pos], exponent)
            },
            None => (body, 0),
        };

        let (int_part, frac_part) = match number.find('.') {
            Some(pos) => (&number[..pos], &number[pos + 1..]),
            None => (number, ""),
        };

        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(NumericError::parse(input));
        }

        let mut digits = Vec::with_capacity(int_part.len() + frac_part.len());
        digits.extend_from_slice(int_part.as_bytes());
        digits.extend_from_slice(frac_part.as_bytes());

        let magnitude = BigInt::parse_bytes(&digits, 10).ok_or_else(|| NumericError::parse(input))?;
        let mantissa = if negative { -magnitude } else { magnitude };
        let scale = u32::try_from(frac_part.len()).map_err(|_| NumericError::parse(input))?;
        Precise::new(mantissa, scale).shift_scale(-exponent)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Precise {
    /// Convert from rust_decimal::Decimal. Always exact.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::new(BigInt::from(d.mantissa()), d.scale())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced value needs more than 28 fractional
    /// digits or a mantissa wider than 96 bits.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let reduced = self.reduce();
        let mantissa = reduced.mantissa.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, reduced.scale)
            .map_err(|_| NumericError::Overflow)
    }
}

impl From<rust_decimal::Decimal> for Precise {
    fn from(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal(d)
    }
}

// ============================================================================
// Serde (string on the wire, accepts JSON numbers on input)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Precise;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Precise {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct PreciseVisitor;

    impl<'de> Visitor<'de> for PreciseVisitor {
        type Value = Precise;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Precise, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Precise, E> {
            Ok(Precise::from_integer(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Precise, E> {
            Ok(Precise::from_integer(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Precise, E> {
            Precise::from_f64(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Precise {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(PreciseVisitor)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

// ============================================================================
// Decimal-String Arithmetic
// Exact arithmetic over wire decimal strings, with unknown-aware operands
// ============================================================================
//
// Every function takes operands as `Option<&str>`, the shape exchange fields
// have after a safe lookup. Conventions:
// - Any absent operand makes the result unknown: `Ok(None)` for arithmetic,
//   `Ok(false)` for predicates. Absence is checked before parsing, and an
//   empty or whitespace-only string counts as absent.
// - A present operand that is not a decimal literal is `Err(Parse)`.
// - Division or remainder by zero is `Err(DivisionByZero)`.
// - Results are canonical strings (reduced, no exponent, no "-0").

use super::errors::NumericResult;
use super::number_format::non_blank;
use super::precise::{Precise, DEFAULT_DIV_PRECISION};
use std::cmp::Ordering;

fn unary(
    a: Option<&str>,
    op: impl FnOnce(Precise) -> NumericResult<Precise>,
) -> NumericResult<Option<String>> {
    let Some(a) = non_blank(a) else {
        return Ok(None);
    };
    op(a.parse()?).map(|p| Some(p.to_string()))
}

fn binary(
    a: Option<&str>,
    b: Option<&str>,
    op: impl FnOnce(Precise, Precise) -> NumericResult<Precise>,
) -> NumericResult<Option<String>> {
    let (Some(a), Some(b)) = (non_blank(a), non_blank(b)) else {
        return Ok(None);
    };
    op(a.parse()?, b.parse()?).map(|p| Some(p.to_string()))
}

pub fn add(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| Ok(x + y))
}

pub fn sub(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| Ok(x - y))
}

pub fn mul(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| Ok(x * y))
}

/// `a / b` with [`DEFAULT_DIV_PRECISION`] fractional digits, truncated toward zero.
pub fn div(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    div_with_precision(a, b, DEFAULT_DIV_PRECISION)
}

/// `a / b` truncated toward zero after `precision` fractional digits.
///
/// `div_with_precision(Some("10"), Some("3"), 4)` is `"3.3333"`. A precision
/// above [`MAX_EXPONENT`](super::MAX_EXPONENT) is `Err(ScaleOutOfRange)`.
pub fn div_with_precision(
    a: Option<&str>,
    b: Option<&str>,
    precision: u32,
) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| x.checked_div(&y, precision))
}

/// Remainder of `a / b`; the sign follows `a`.
pub fn modulo(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| x.checked_rem(&y))
}

pub fn abs(a: Option<&str>) -> NumericResult<Option<String>> {
    unary(a, |x| Ok(x.abs()))
}

pub fn neg(a: Option<&str>) -> NumericResult<Option<String>> {
    unary(a, |x| Ok(-x))
}

/// Canonical form of a decimal string (`"001.2300"` -> `"1.23"`).
pub fn reduce(a: Option<&str>) -> NumericResult<Option<String>> {
    unary(a, |x| Ok(x.reduce()))
}

pub fn min(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| Ok(x.min(y)))
}

pub fn max(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<String>> {
    binary(a, b, |x, y| Ok(x.max(y)))
}

/// Exact ordering of two decimal strings, `None` if either is absent.
pub fn compare(a: Option<&str>, b: Option<&str>) -> NumericResult<Option<Ordering>> {
    let (Some(a), Some(b)) = (non_blank(a), non_blank(b)) else {
        return Ok(None);
    };
    let (x, y): (Precise, Precise) = (a.parse()?, b.parse()?);
    Ok(Some(x.cmp(&y)))
}

fn compare_is(
    a: Option<&str>,
    b: Option<&str>,
    accept: impl FnOnce(Ordering) -> bool,
) -> NumericResult<bool> {
    Ok(compare(a, b)?.is_some_and(accept))
}

pub fn eq(a: Option<&str>, b: Option<&str>) -> NumericResult<bool> {
    compare_is(a, b, Ordering::is_eq)
}

pub fn lt(a: Option<&str>, b: Option<&str>) -> NumericResult<bool> {
    compare_is(a, b, Ordering::is_lt)
}

pub fn le(a: Option<&str>, b: Option<&str>) -> NumericResult<bool> {
    compare_is(a, b, Ordering::is_le)
}

pub fn gt(a: Option<&str>, b: Option<&str>) -> NumericResult<bool> {
    compare_is(a, b, Ordering::is_gt)
}

pub fn ge(a: Option<&str>, b: Option<&str>) -> NumericResult<bool> {
    compare_is(a, b, Ordering::is_ge)
}

// ============================================================================
// Tests
// ============================================================================

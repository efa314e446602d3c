// ============================================================================
// Numeric Module
// Exact decimal arithmetic for exchange wire values
// ============================================================================
//
// This module provides:
// - BigInt: re-exported num_bigint mantissa type
// - Precise: immutable decimal value, mantissa × 10^(-scale)
// - string_math: unknown-aware arithmetic over decimal strings
// - number_format: float rendering and tick-size helpers
// - precision: rounding to decimal places, significant digits or a tick
// - NumericError: error types for arithmetic and conversion
//
// Design principles:
// - No floating-point operations on the arithmetic path
// - All fallible arithmetic returns Result (no panics)
// - Values are immutable; every operation returns a new value

mod errors;
mod number_format;
mod precise;
mod precision;
pub mod string_math;

#[cfg(test)]
mod proptest_properties;

pub use errors::{NumericError, NumericResult};
pub use number_format::{number_to_string, omit_zero, parse_precision, precision_from_string};
pub use num_bigint::BigInt;
pub use precise::{Precise, DEFAULT_DIV_PRECISION, MAX_EXPONENT};
pub use precision::{
    amount_to_precision, decimal_to_precision, price_to_precision, CountingMode, PaddingMode,
    RoundingMode,
};

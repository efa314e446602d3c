// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic and scale conversion
// ============================================================================

use thiserror::Error;

/// Errors that can occur during decimal arithmetic or scale conversion.
///
/// `Parse` and `DivisionByZero` are always fatal to the single operation that
/// raised them. `MissingValue` and `MissingScale` are only ever returned when
/// the converter is configured to treat absent data as fatal; the default
/// policy reports those cases as an unknown (`None`) result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input is not a well-formed decimal or integer literal
    #[error("invalid input: could not parse {input:?} as a decimal")]
    Parse { input: String },

    /// Divisor was exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// A market or currency record had no usable scale for the requested field
    #[error("missing scale: no usable `{field}` on the market record")]
    MissingScale { field: &'static str },

    /// The raw value to convert was absent
    #[error("missing value: nothing to convert")]
    MissingValue,

    /// Scaling would drop significant fractional digits
    #[error("precision loss: {value} has more than {scale} fractional digits")]
    PrecisionLoss { value: String, scale: u32 },

    /// Scale exceeds the configured bound
    #[error("scale {scale} out of range (maximum {max})")]
    ScaleOutOfRange { scale: u32, max: u32 },

    /// Rounding precision is not usable for the counting mode
    /// (fractional place count, negative digit count, non-positive tick)
    #[error("invalid precision {precision:?} for the requested counting mode")]
    InvalidPrecision { precision: String },

    /// Value does not fit the requested target type
    #[error("arithmetic overflow: value does not fit the target type")]
    Overflow,
}

impl NumericError {
    pub(crate) fn parse(input: &str) -> Self {
        NumericError::Parse {
            input: input.to_string(),
        }
    }

    /// True for errors raised by the arithmetic core itself, as opposed to
    /// missing-data errors raised by a strict converter policy.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            NumericError::Parse { .. }
                | NumericError::DivisionByZero
                | NumericError::InvalidPrecision { .. }
                | NumericError::ScaleOutOfRange { .. }
                | NumericError::Overflow
        )
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

// ============================================================================
// Converter Configuration
// Policies for absent data and excess precision during scale conversion
// ============================================================================

use crate::numeric::{NumericError, NumericResult, MAX_EXPONENT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale accepted by default. Crypto amounts top out around 18.
pub const DEFAULT_MAX_SCALE: u32 = 36;

/// Hard ceiling for `max_scale`; anything larger is corrupt metadata. Equal
/// to the widest decimal shift the arithmetic core performs.
pub const SCALE_LIMIT: u32 = MAX_EXPONENT;

// ============================================================================
// Policies
// ============================================================================

/// What to do when the raw value to convert is absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingValuePolicy {
    /// Report the result as unknown (`None`)
    #[default]
    Unknown,
    /// Treat the value as zero
    Zero,
    /// Return `NumericError::MissingValue`
    Fail,
}

/// What to do when the market record has no usable scale for the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingScalePolicy {
    /// Report the result as unknown (`None`)
    #[default]
    Unknown,
    /// Return `NumericError::MissingScale`
    Fail,
}

/// What to do when a human value has more fractional digits than the scale
/// can encode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExcessPrecisionPolicy {
    /// Drop the excess digits toward zero (`"1.239"` at scale 2 is `123`,
    /// `"-1.239"` is `-123`)
    #[default]
    Truncate,
    /// Return `NumericError::PrecisionLoss`
    Reject,
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`ScaleConverter`](crate::scale::ScaleConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    pub missing_value: MissingValuePolicy,
    pub missing_scale: MissingScalePolicy,
    pub excess_precision: ExcessPrecisionPolicy,
    /// Scales above this are rejected with `ScaleOutOfRange`
    pub max_scale: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            missing_value: MissingValuePolicy::default(),
            missing_scale: MissingScalePolicy::default(),
            excess_precision: ExcessPrecisionPolicy::default(),
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl ConverterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set missing-value policy
    pub fn with_missing_value(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_value = policy;
        self
    }

    /// Builder method: Set missing-scale policy
    pub fn with_missing_scale(mut self, policy: MissingScalePolicy) -> Self {
        self.missing_scale = policy;
        self
    }

    /// Builder method: Set excess-precision policy
    pub fn with_excess_precision(mut self, policy: ExcessPrecisionPolicy) -> Self {
        self.excess_precision = policy;
        self
    }

    /// Builder method: Set maximum scale
    pub fn with_max_scale(mut self, max_scale: u32) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.max_scale > SCALE_LIMIT {
            return Err(NumericError::ScaleOutOfRange {
                scale: self.max_scale,
                max: SCALE_LIMIT,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Response parsing: absent fields and scales become unknown, excess
    /// precision is truncated. Same as `default()`.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Order placement: every absent input and every dropped digit is an error.
    pub fn strict() -> Self {
        Self::default()
            .with_missing_value(MissingValuePolicy::Fail)
            .with_missing_scale(MissingScalePolicy::Fail)
            .with_excess_precision(ExcessPrecisionPolicy::Reject)
    }

    /// Balance sheets: absent amounts count as zero, missing scales stay unknown.
    pub fn zero_filled() -> Self {
        Self::default().with_missing_value(MissingValuePolicy::Zero)
    }
}

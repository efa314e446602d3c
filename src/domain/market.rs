// ============================================================================
// Market Scales
// Scale descriptors carried by a market or currency record
// ============================================================================

use super::scale_field::ScaleField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// The scale exponents an adapter parsed out of exchange metadata for one
/// market or currency.
///
/// Each field is optional: spot markets usually have no `ratioScale`,
/// currencies only have a `valueScale`.
///
/// # Example
/// ```
/// use exchange_numeric::domain::{MarketScales, ScaleField};
///
/// let btc_usd = MarketScales::new().with_price_scale(4).with_value_scale(8);
/// assert_eq!(btc_usd.get(ScaleField::Price), Some(4));
/// assert_eq!(btc_usd.get(ScaleField::Ratio), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarketScales {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_scale", skip_serializing_if = "Option::is_none")
    )]
    pub price_scale: Option<u32>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_scale", skip_serializing_if = "Option::is_none")
    )]
    pub value_scale: Option<u32>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "lenient_scale", skip_serializing_if = "Option::is_none")
    )]
    pub ratio_scale: Option<u32>,
}

impl MarketScales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set price scale
    pub fn with_price_scale(mut self, scale: u32) -> Self {
        self.price_scale = Some(scale);
        self
    }

    /// Builder method: Set value (amount) scale
    pub fn with_value_scale(mut self, scale: u32) -> Self {
        self.value_scale = Some(scale);
        self
    }

    /// Builder method: Set ratio (rate) scale
    pub fn with_ratio_scale(mut self, scale: u32) -> Self {
        self.ratio_scale = Some(scale);
        self
    }

    pub fn get(&self, field: ScaleField) -> Option<u32> {
        match field {
            ScaleField::Price => self.price_scale,
            ScaleField::Value => self.value_scale,
            ScaleField::Ratio => self.ratio_scale,
        }
    }

    pub fn set(&mut self, field: ScaleField, scale: Option<u32>) {
        match field {
            ScaleField::Price => self.price_scale = scale,
            ScaleField::Value => self.value_scale = scale,
            ScaleField::Ratio => self.ratio_scale = scale,
        }
    }

    /// Copy of `self` with missing scales filled from `fallback`.
    ///
    /// Spot markets inherit their `valueScale` from the base currency record.
    pub fn or(self, fallback: MarketScales) -> Self {
        Self {
            price_scale: self.price_scale.or(fallback.price_scale),
            value_scale: self.value_scale.or(fallback.value_scale),
            ratio_scale: self.ratio_scale.or(fallback.ratio_scale),
        }
    }
}

/// Safe-integer reading of a JSON scale: non-negative integers, integral
/// floats and digit strings are accepted, anything else is treated as absent.
#[cfg(feature = "serde")]
pub(crate) fn scale_from_json(value: &serde_json::Value) -> Option<u32> {
    use serde_json::Value;

    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u64)
            })
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(feature = "serde")]
fn lenient_scale<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(scale_from_json))
}

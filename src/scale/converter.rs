// ============================================================================
// Scale Converter
// Policy-driven conversion between human amounts and scaled wire integers
// ============================================================================

use super::primitives::{scale_from_wire, scale_to_wire};
use crate::domain::{
    ConverterConfig, ExcessPrecisionPolicy, MissingScalePolicy, MissingValuePolicy, ScaleField,
};
use crate::interfaces::{NumericInput, ScaleSource};
use crate::numeric::{parse_precision, NumericError, NumericResult};

/// Name reported in `MissingScale` when the caller passed a bare scale.
const BARE_SCALE: &str = "scale";

/// Converts between unified decimal strings and an exchange's scaled integers.
///
/// The converter holds only its immutable configuration, so one instance can
/// be shared by every in-flight request and response pipeline.
///
/// Absent inputs are resolved by [`ConverterConfig`]: by default an absent
/// value or scale yields `Ok(None)`. A blank value (empty string, JSON null)
/// is absent. Malformed literals are always errors.
///
/// # Example
/// ```
/// use exchange_numeric::prelude::*;
///
/// let converter = ScaleConverter::default();
/// let market = MarketScales::new().with_price_scale(4).with_value_scale(8);
///
/// let price_ep = converter.to_price(Some("50000.5"), Some(&market)).unwrap();
/// assert_eq!(price_ep.as_deref(), Some("500005000"));
///
/// let price = converter.from_price(Some("500005000"), Some(&market)).unwrap();
/// assert_eq!(price.as_deref(), Some("50000.5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScaleConverter {
    config: ConverterConfig,
}

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    ToWire,
    FromWire,
}

impl ScaleConverter {
    /// Create a converter from a validated configuration.
    ///
    /// # Errors
    /// Returns the validation error of `config`.
    pub fn new(config: ConverterConfig) -> NumericResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// See [`ConverterConfig::permissive`]
    pub fn permissive() -> Self {
        Self {
            config: ConverterConfig::permissive(),
        }
    }

    /// See [`ConverterConfig::strict`]
    pub fn strict() -> Self {
        Self {
            config: ConverterConfig::strict(),
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ========================================================================
    // Bare-scale conversions
    // ========================================================================

    /// Human value to wire integer at an explicit scale.
    pub fn to_scaled<V: NumericInput + ?Sized>(
        &self,
        value: Option<&V>,
        scale: Option<u32>,
    ) -> NumericResult<Option<String>> {
        self.convert(value, scale, BARE_SCALE, Direction::ToWire)
    }

    /// Wire integer to human value at an explicit scale.
    pub fn from_scaled<V: NumericInput + ?Sized>(
        &self,
        wire: Option<&V>,
        scale: Option<u32>,
    ) -> NumericResult<Option<String>> {
        self.convert(wire, scale, BARE_SCALE, Direction::FromWire)
    }

    // ========================================================================
    // Market-record conversions
    // ========================================================================

    /// Human value to wire integer using `field`'s scale from `source`.
    pub fn to_field<V, S>(
        &self,
        value: Option<&V>,
        source: Option<&S>,
        field: ScaleField,
    ) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        let scale = source.and_then(|s| s.scale_of(field));
        self.convert(value, scale, field.wire_name(), Direction::ToWire)
    }

    /// Wire integer to human value using `field`'s scale from `source`.
    pub fn from_field<V, S>(
        &self,
        wire: Option<&V>,
        source: Option<&S>,
        field: ScaleField,
    ) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        let scale = source.and_then(|s| s.scale_of(field));
        self.convert(wire, scale, field.wire_name(), Direction::FromWire)
    }

    /// Order price to `priceScale` wire integer
    pub fn to_price<V, S>(&self, price: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.to_field(price, market, ScaleField::Price)
    }

    /// Order amount to `valueScale` wire integer
    pub fn to_amount<V, S>(&self, amount: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.to_field(amount, market, ScaleField::Value)
    }

    /// Rate to `ratioScale` wire integer
    pub fn to_ratio<V, S>(&self, ratio: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.to_field(ratio, market, ScaleField::Ratio)
    }

    /// `priceScale` wire integer to price
    pub fn from_price<V, S>(&self, wire: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.from_field(wire, market, ScaleField::Price)
    }

    /// `valueScale` wire integer to amount
    pub fn from_amount<V, S>(&self, wire: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.from_field(wire, market, ScaleField::Value)
    }

    /// `ratioScale` wire integer to rate
    pub fn from_ratio<V, S>(&self, wire: Option<&V>, market: Option<&S>) -> NumericResult<Option<String>>
    where
        V: NumericInput + ?Sized,
        S: ScaleSource + ?Sized,
    {
        self.from_field(wire, market, ScaleField::Ratio)
    }

    /// Smallest representable step of `field` on `source` (`10^-scale`).
    ///
    /// A `valueScale` of 8 gives `"0.00000001"`; this is the market's amount
    /// precision in unified terms.
    pub fn tick_size<S: ScaleSource + ?Sized>(
        &self,
        source: Option<&S>,
        field: ScaleField,
    ) -> NumericResult<Option<String>> {
        let Some(scale) = source.and_then(|s| s.scale_of(field)) else {
            return self.on_missing_scale(field.wire_name());
        };
        self.check_scale(scale)?;
        Ok(Some(parse_precision(scale)))
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn convert<V: NumericInput + ?Sized>(
        &self,
        value: Option<&V>,
        scale: Option<u32>,
        field: &'static str,
        direction: Direction,
    ) -> NumericResult<Option<String>> {
        let Some(value) = value.filter(|v| !v.is_blank()) else {
            return self.on_missing_value(field);
        };
        let Some(scale) = scale else {
            return self.on_missing_scale(field);
        };
        self.check_scale(scale)?;

        let precise = value.to_precise()?;
        match direction {
            Direction::FromWire => Ok(Some(scale_from_wire(&precise, scale)?.to_string())),
            Direction::ToWire => {
                let scaled = scale_to_wire(&precise, scale)?;
                if !scaled.exact {
                    match self.config.excess_precision {
                        ExcessPrecisionPolicy::Truncate => {
                            tracing::trace!(field, scale, value = %precise, "truncating excess precision");
                        },
                        ExcessPrecisionPolicy::Reject => {
                            return Err(NumericError::PrecisionLoss {
                                value: precise.to_string(),
                                scale,
                            });
                        },
                    }
                }
                Ok(Some(scaled.wire.to_string()))
            },
        }
    }

    fn check_scale(&self, scale: u32) -> NumericResult<()> {
        if scale > self.config.max_scale {
            return Err(NumericError::ScaleOutOfRange {
                scale,
                max: self.config.max_scale,
            });
        }
        Ok(())
    }

    fn on_missing_value(&self, field: &'static str) -> NumericResult<Option<String>> {
        match self.config.missing_value {
            MissingValuePolicy::Unknown => Ok(None),
            MissingValuePolicy::Zero => {
                tracing::trace!(field, "missing value treated as zero");
                Ok(Some("0".to_string()))
            },
            MissingValuePolicy::Fail => Err(NumericError::MissingValue),
        }
    }

    fn on_missing_scale(&self, field: &'static str) -> NumericResult<Option<String>> {
        match self.config.missing_scale {
            MissingScalePolicy::Unknown => {
                tracing::debug!(field, "scale missing on market record, result unknown");
                Ok(None)
            },
            MissingScalePolicy::Fail => Err(NumericError::MissingScale { field }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketScales;

    fn btc_usd() -> MarketScales {
        MarketScales::new()
            .with_price_scale(4)
            .with_value_scale(8)
            .with_ratio_scale(8)
    }

    #[test]
    fn test_named_wrappers_use_their_own_scale() {
        let c = ScaleConverter::default();
        let m = btc_usd();

        assert_eq!(
            c.to_price(Some("50000.5"), Some(&m)).unwrap().as_deref(),
            Some("500005000")
        );
        assert_eq!(
            c.to_amount(Some("0.5"), Some(&m)).unwrap().as_deref(),
            Some("50000000")
        );
        assert_eq!(
            c.to_ratio(Some("0.00075"), Some(&m)).unwrap().as_deref(),
            Some("75000")
        );
        assert_eq!(
            c.from_price(Some("500005000"), Some(&m)).unwrap().as_deref(),
            Some("50000.5")
        );
        assert_eq!(
            c.from_amount(Some("50000000"), Some(&m)).unwrap().as_deref(),
            Some("0.5")
        );
        assert_eq!(
            c.from_ratio(Some("-37500"), Some(&m)).unwrap().as_deref(),
            Some("-0.000375")
        );
    }

    #[test]
    fn test_bare_scale() {
        let c = ScaleConverter::default();
        assert_eq!(
            c.to_scaled(Some("123.45"), Some(2)).unwrap().as_deref(),
            Some("12345")
        );
        assert_eq!(
            c.from_scaled(Some(&12345u64), Some(2)).unwrap().as_deref(),
            Some("123.45")
        );
    }

    #[test]
    fn test_permissive_missing_inputs_are_unknown() {
        let c = ScaleConverter::permissive();
        let m = btc_usd();
        let spot = MarketScales::new().with_price_scale(2);

        assert_eq!(c.from_price::<str, _>(None, Some(&m)), Ok(None));
        assert_eq!(c.from_price::<_, MarketScales>(Some("1"), None), Ok(None));
        assert_eq!(c.from_ratio(Some("1"), Some(&spot)), Ok(None));
        assert_eq!(c.to_scaled(Some("1"), None), Ok(None));
        assert_eq!(c.from_scaled::<str>(None, Some(8)), Ok(None));
    }

    #[test]
    fn test_strict_missing_inputs_fail() {
        let c = ScaleConverter::strict();
        let spot = MarketScales::new().with_price_scale(2);

        assert_eq!(
            c.from_ratio(Some("1"), Some(&spot)),
            Err(NumericError::MissingScale {
                field: "ratioScale"
            })
        );
        assert_eq!(
            c.to_amount::<str, _>(None, Some(&spot)),
            Err(NumericError::MissingValue)
        );
        assert_eq!(
            c.to_scaled(Some("1"), None),
            Err(NumericError::MissingScale { field: "scale" })
        );
    }

    #[test]
    fn test_zero_filled_missing_value() {
        let c = ScaleConverter::new(ConverterConfig::zero_filled()).unwrap();
        assert_eq!(
            c.from_amount::<str, _>(None, Some(&btc_usd())).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_blank_value_follows_missing_value_policy() {
        let m = btc_usd();

        let permissive = ScaleConverter::permissive();
        assert_eq!(permissive.from_price(Some(""), Some(&m)), Ok(None));
        assert_eq!(permissive.to_amount(Some(" "), Some(&m)), Ok(None));

        let strict = ScaleConverter::strict();
        assert_eq!(
            strict.from_price(Some(""), Some(&m)),
            Err(NumericError::MissingValue)
        );

        let zero_filled = ScaleConverter::new(ConverterConfig::zero_filled()).unwrap();
        assert_eq!(
            zero_filled.from_amount(Some(""), Some(&m)).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_excess_precision_policy() {
        let truncating = ScaleConverter::default();
        assert_eq!(
            truncating.to_scaled(Some("1.239"), Some(2)).unwrap().as_deref(),
            Some("123")
        );
        assert_eq!(
            truncating.to_scaled(Some("-1.239"), Some(2)).unwrap().as_deref(),
            Some("-123")
        );

        let rejecting = ScaleConverter::strict();
        assert_eq!(
            rejecting.to_scaled(Some("1.239"), Some(2)),
            Err(NumericError::PrecisionLoss {
                value: "1.239".to_string(),
                scale: 2
            })
        );
        assert_eq!(
            rejecting.to_scaled(Some("1.2300"), Some(2)).unwrap().as_deref(),
            Some("123")
        );
    }

    #[test]
    fn test_scale_out_of_range() {
        let c = ScaleConverter::new(ConverterConfig::new().with_max_scale(18)).unwrap();
        assert_eq!(
            c.to_scaled(Some("1"), Some(19)),
            Err(NumericError::ScaleOutOfRange { scale: 19, max: 18 })
        );
        assert!(ScaleConverter::new(ConverterConfig::new().with_max_scale(5000)).is_err());
    }

    #[test]
    fn test_malformed_value_is_fatal_even_when_permissive() {
        let c = ScaleConverter::permissive();
        assert!(matches!(
            c.from_price(Some("1,000"), Some(&btc_usd())),
            Err(NumericError::Parse { .. })
        ));
    }

    #[test]
    fn test_tick_size() {
        let c = ScaleConverter::default();
        let m = btc_usd();
        assert_eq!(
            c.tick_size(Some(&m), ScaleField::Price).unwrap().as_deref(),
            Some("0.0001")
        );
        assert_eq!(
            c.tick_size(Some(&MarketScales::new()), ScaleField::Value),
            Ok(None)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_raw_json_market_record() {
        use serde_json::json;

        let c = ScaleConverter::default();
        let market = json!({ "symbol": "sBTCUSDT", "priceScale": 8, "valueScale": "8" });
        assert_eq!(
            c.from_price(Some("2712345000000"), Some(&market)).unwrap().as_deref(),
            Some("27123.45")
        );
        assert_eq!(
            c.to_amount(Some("0.001"), Some(&market)).unwrap().as_deref(),
            Some("100000")
        );
        assert_eq!(c.from_ratio(Some("1"), Some(&market)), Ok(None));
    }

    #[test]
    fn test_converter_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ScaleConverter>();
    }
}

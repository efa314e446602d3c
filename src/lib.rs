// ============================================================================
// Exchange Numeric Library
// Exact decimal arithmetic and scaled-integer conversion for exchange adapters
// ============================================================================

//! # Exchange Numeric
//!
//! Exact decimal arithmetic and scaled-integer wire conversion for
//! cryptocurrency exchange adapters.
//!
//! ## Features
//!
//! - **Exact decimals** (`Precise`): arbitrary-precision mantissa plus a
//!   decimal-point offset, no binary floating point on any arithmetic path
//! - **String arithmetic** (`numeric::string_math`): unknown-aware operations
//!   over decimal strings, the shape adapters receive from JSON
//! - **Scale conversion** (`ScaleConverter`): `priceScale`/`valueScale`/
//!   `ratioScale` encoded integers to unified decimals and back
//! - **Precision rounding** (`decimal_to_precision`): fit prices and amounts
//!   to decimal places, significant digits or a tick size
//! - **Configurable failure tiers** for missing values, missing scales and
//!   excess precision
//!
//! ## Example
//!
//! ```rust
//! use exchange_numeric::prelude::*;
//!
//! // Arithmetic on wire strings
//! let fee = string_math::add(Some("0.0001"), Some("0.0006")).unwrap();
//! assert_eq!(fee.as_deref(), Some("0.0007"));
//! assert!(string_math::lt(Some("0.1"), Some("0.25")).unwrap());
//!
//! // Scale conversion against a market record
//! let market = MarketScales::new().with_price_scale(4).with_value_scale(8);
//! let converter = ScaleConverter::default();
//!
//! let price_ep = converter.to_price(Some("27123.45"), Some(&market)).unwrap();
//! assert_eq!(price_ep.as_deref(), Some("271234500"));
//!
//! let amount = converter.from_amount(Some("150000000"), Some(&market)).unwrap();
//! assert_eq!(amount.as_deref(), Some("1.5"));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod scale;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ConverterConfig, ExcessPrecisionPolicy, MarketScales, MissingScalePolicy,
        MissingValuePolicy, ScaleField,
    };
    pub use crate::interfaces::{NumericInput, ScaleSource};
    pub use crate::numeric::{
        amount_to_precision, decimal_to_precision, parse_precision, precision_from_string,
        price_to_precision, string_math, CountingMode, NumericError, NumericResult, PaddingMode,
        Precise, RoundingMode,
    };
    pub use crate::scale::{from_scaled_integer, to_scaled_integer, ScaleConverter};
}

// ============================================================================
// Scale Module
// Conversion between unified decimals and exchange scaled-integer fields
// ============================================================================
//
// Exchanges such as Phemex encode prices, amounts and rates as integers with
// an implicit per-market exponent (priceScale, valueScale, ratioScale):
// - Outgoing: value × 10^scale, excess digits truncated toward zero
// - Incoming: wire × 10^(-scale), reduced to canonical form

mod converter;
mod primitives;

pub use converter::ScaleConverter;
pub use primitives::{from_scaled_integer, to_scaled_integer};

// ============================================================================
// Scale Source Interface
// Where the converter looks up a market's or currency's scale exponents
// ============================================================================

use crate::domain::{MarketScales, ScaleField};
use std::collections::{BTreeMap, HashMap};

/// Anything that can answer "how many implicit decimals does field X carry".
///
/// Implemented for the typed [`MarketScales`], for string-keyed maps of
/// already-extracted scales, and (with the `serde` feature) for the raw JSON
/// market record itself.
pub trait ScaleSource {
    /// Scale for `field`, or `None` if the record has no usable value.
    fn scale_of(&self, field: ScaleField) -> Option<u32>;
}

impl ScaleSource for MarketScales {
    fn scale_of(&self, field: ScaleField) -> Option<u32> {
        self.get(field)
    }
}

impl ScaleSource for HashMap<String, u32> {
    fn scale_of(&self, field: ScaleField) -> Option<u32> {
        self.get(field.wire_name()).copied()
    }
}

impl ScaleSource for BTreeMap<String, u32> {
    fn scale_of(&self, field: ScaleField) -> Option<u32> {
        self.get(field.wire_name()).copied()
    }
}

impl<T: ScaleSource + ?Sized> ScaleSource for &T {
    fn scale_of(&self, field: ScaleField) -> Option<u32> {
        (**self).scale_of(field)
    }
}

#[cfg(feature = "serde")]
impl ScaleSource for serde_json::Value {
    fn scale_of(&self, field: ScaleField) -> Option<u32> {
        self.get(field.wire_name())
            .and_then(crate::domain::market::scale_from_json)
    }
}

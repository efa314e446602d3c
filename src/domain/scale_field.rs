// ============================================================================
// Scale Field
// Which quantity class a scale exponent belongs to
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quantity class of an integer-encoded exchange field.
///
/// A single market record carries one scale per class. Reading the wrong one
/// silently corrupts order prices or sizes, so every conversion names its
/// class explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScaleField {
    /// Prices (`priceEp`, `bidEp`, `stopPxEp`)
    Price,
    /// Amounts and values (`baseQtyEv`, `balanceEv`)
    Value,
    /// Ratios and rates (`takerFeeRateEr`, `fundingRateEr`)
    Ratio,
}

impl ScaleField {
    pub const ALL: [ScaleField; 3] = [ScaleField::Price, ScaleField::Value, ScaleField::Ratio];

    /// Key of this scale on an exchange market record.
    pub const fn wire_name(self) -> &'static str {
        match self {
            ScaleField::Price => "priceScale",
            ScaleField::Value => "valueScale",
            ScaleField::Ratio => "ratioScale",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }
}

impl fmt::Display for ScaleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

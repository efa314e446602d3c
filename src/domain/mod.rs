// ============================================================================
// Domain Models Module
// Scale descriptors and converter configuration
// ============================================================================

pub mod config;
pub mod market;
pub mod scale_field;

pub use config::{
    ConverterConfig, ExcessPrecisionPolicy, MissingScalePolicy, MissingValuePolicy,
    DEFAULT_MAX_SCALE, SCALE_LIMIT,
};
pub use market::MarketScales;
pub use scale_field::ScaleField;

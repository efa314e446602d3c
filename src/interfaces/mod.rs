// ============================================================================
// Interfaces Module
// Traits at the seams between adapters and the numeric core
// ============================================================================

pub mod numeric_input;
pub mod scale_source;

pub use numeric_input::NumericInput;
pub use scale_source::ScaleSource;

// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the numeric core
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_logging_with, DEFAULT_FILTER};

// ============================================================================
// Logging
// Optional tracing subscriber for binaries and demos embedding this crate
// ============================================================================

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Default directive when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatted `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once. If the host already installed a global
/// subscriber this is a no-op.
pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

/// Like [`init_logging`] with a caller-chosen fallback directive.
pub fn init_logging_with(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(default_filter, "logging initialized");
        }
    });
}

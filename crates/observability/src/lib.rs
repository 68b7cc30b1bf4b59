//! Process-wide logging setup.
//!
//! Logs are JSON lines on stderr; stdout is left to the binary's own summary.

/// Log filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize logging with [`DEFAULT_FILTER`] as the fallback.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    logging::init(DEFAULT_FILTER);
}

/// Subscriber construction.
pub mod logging;

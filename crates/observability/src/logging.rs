//! JSON subscriber writing to stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to `default_directives`.
pub fn filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(default_directives: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directives))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init("debug");
        assert!(!init("debug"));
    }
}

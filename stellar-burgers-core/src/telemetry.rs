//! Tracing subscriber setup
//!
//! Client calls emit `tracing` spans and events; nothing is printed until
//! a subscriber is installed. Test binaries and the CLI call [`init`]
//! once at start; later calls are ignored.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter variable checked before `RUST_LOG`
pub const LOG_FILTER_ENV: &str = "STELLAR_BURGERS_LOG";

/// Install a stderr fmt subscriber filtered by env or `default_filter`
///
/// Returns `false` when a subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = std::env::var(LOG_FILTER_ENV)
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Subscriber for tests: writes through the test harness capture
pub fn init_for_tests() {
    let filter = std::env::var(LOG_FILTER_ENV)
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_for_tests();
        assert!(!init("debug"));
    }
}

//! # Logging Module
//!
//! Logger setup for binaries and tests. The estimator itself only emits
//! records through the `log` facade and works without any logger installed.

use env_logger::{Builder, Env};

/// Initialize logging from `RUST_LOG`, defaulting to `info`
///
/// # Examples
///
/// ```no_run
/// egg_count::logging::init();
/// ```
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Initialize verbose logging captured by the test harness
///
/// Safe to call from every test; only the first call installs the logger.
pub fn init_test() {
    let _ = Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

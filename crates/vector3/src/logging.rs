//! Logging utilities
//!
//! The crate logs through the `log` facade and only on degenerate inputs
//! (zero-length normalization, parallel slerp), at `trace` level.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Honors `RUST_LOG` and falls back to `info` when it is unset.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Initialize logging for tests; safe to call more than once
#[cfg(test)]
pub(crate) fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}

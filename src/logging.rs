//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go.
//!
//! # Environment
//! - `RUST_LOG`: filter directive (default `info`), e.g.
//!   `RUST_LOG=lab_rotation=debug`

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global formatting subscriber.
///
/// # Errors
/// Fails if a global subscriber is already set.
///
/// # Example
/// ```no_run
/// lab_rotation::logging::init().expect("subscriber already installed");
/// ```
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .try_init()
}

/// Debug-level subscriber writing through the test harness. Safe to call
/// from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("subscriber installed");
    }
}

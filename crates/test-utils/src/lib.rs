//! Shared helpers for mapcraft's integration tests.
//!
//! - [`init_tracing`]: one-time log capture for the test harness.
//! - [`builders`]: config text builders and an on-disk fixture.

pub mod builders;

use std::sync::Once;

use mapcraft::logging::LOG_ENV;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// The filter comes from `MAPCRAFT_LOG`, then `RUST_LOG`, then `warn`.
/// Output goes through the test writer, so it only shows up for failing
/// tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may have installed a subscriber already.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

//! Helpers shared by the integration tests.
//!
//! Set `TEST_LOG=debug` (or `RUST_LOG`) to see every transition.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

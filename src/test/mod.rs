
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TEST_LOGGING: Once = Once::new();

/// Installs a global subscriber once per test binary so `tracing` output from the tree shows up
/// in failing tests. Honours `RUST_LOG` and defaults to `debug`.
pub(crate) fn init_test_logging() {
    TEST_LOGGING.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_test_writer()
            .try_init()
            .unwrap_or_else(|e| eprintln!("Error: Failed to set up logging: {}", e));
    });
}

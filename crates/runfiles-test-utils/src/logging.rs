//! Tracing subscriber setup for tests.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a compact subscriber writing through the test harness's
/// output capture, filtered by `RUST_LOG` (default `runfiles=debug`).
///
/// Safe to call from every test in a suite; only the first call in a
/// process installs a subscriber, the rest are no-ops.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_test_writer()
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runfiles=debug"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info};

    #[test]
    fn init_is_idempotent() {
        init();
        init();

        debug!("debug after double init");
        info!("info after double init");
    }
}

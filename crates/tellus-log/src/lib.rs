//! Structured logging for the Tellus tools.
//!
//! Console output with uptime timestamps and module paths via the `tracing`
//! ecosystem, filterable through `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset (e.g. `"info"` or
/// `"info,tellus_planet=debug"`). Calling this a second time is a no-op, so
/// tests and embedding hosts can both call it safely.
pub fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .ok();
}

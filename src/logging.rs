//! Tracing subscriber setup for the replay binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's call. Filtering follows `RUST_LOG`, defaulting to `info` for this
//! crate and `warn` for everything else.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn,splitboard=info";

/// Install a stderr fmt subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

//! Tracing subscriber setup

use std::io;
use tracing::trace;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber writing to stderr, filtered by `RUST_LOG`
///
/// Logs go to stderr so the board on stdout stays readable.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    trace!("tracing initialised");
}

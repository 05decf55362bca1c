//! Diagnostic tracing.
//!
//! Status lines for the user are printed by the interaction adapter; this
//! module only configures `tracing` output on stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug` for
/// this crate when `debug` is true.
pub fn init(debug: bool) {
    let default_filter = if debug { "warn,tested_up_to=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

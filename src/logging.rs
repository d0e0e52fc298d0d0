//! Installs the process-wide `tracing` subscriber for the binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initializes logging to stderr, filtered by `RUST_LOG` and defaulting to `info`.
///
/// The library itself only emits events, so tests may install their own subscriber instead.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

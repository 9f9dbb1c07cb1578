//! Tracing subscriber setup for binaries embedding the engine.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with `RUST_LOG` filtering,
/// defaulting to `info` when no filter is configured.
///
/// Safe to call more than once; subsequent calls are ignored.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}

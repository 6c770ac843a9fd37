//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering. Validation
/// rejections log at `warn`, durable write failures at `error`, recoverable
/// read/parse degradations at `debug`. Safe to call more than once; later
/// calls are no-ops, so tests can call it freely.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` controls verbosity and defaults to
/// `warn` so demo output stays readable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

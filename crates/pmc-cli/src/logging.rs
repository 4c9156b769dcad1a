use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber at the default `WARN` level.
pub fn setup_tracing() {
    setup_tracing_with_log_level(Level::WARN);
}

/// Install a fmt subscriber writing to stderr. `RUST_LOG` overrides `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

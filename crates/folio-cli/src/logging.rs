//! Logging bootstrap.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber, writing to stderr so stdout stays JSON.
///
/// Records emitted through the `log` facade by the library crates are
/// captured as well.
pub fn init(level: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("Global subscriber already installed");
    }
}

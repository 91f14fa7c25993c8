//! Log output for the command line: human readable, on stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = match level.trim().to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error") => l.to_string(),
        other => return Err(format!("invalid log level `{}`", other)),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(&level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}

/// The binary and the library both log under the `locsheet` target.
fn default_directives(level: &str) -> String {
    format!("locsheet={level}")
}

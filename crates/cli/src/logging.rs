//! Log subscriber setup shared by the command-line tools.

use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber on stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Standard output is left to the tool's own output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so log lines never mix with the page on stdout.
///
/// `RUST_LOG` wins over `default_directive` when set.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

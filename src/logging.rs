use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "RAMSWAP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Logs go to stderr so stdout stays clean for frames.
pub fn init(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

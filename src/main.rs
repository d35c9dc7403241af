//! Tool Catalog Entry Point
//!
//! Initializes logging, loads configuration, and runs the terminal front end.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt};

use tool_catalog::core::{Config, Shell, Terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.site.name, config.site.version);
    info!("Storage: {}", config.storage.description());

    let shell = Shell::new(config)?;
    let background = shell.start();

    Terminal::run(&shell).await?;

    background.preload.cancel();
    info!("Shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` wins when set. Otherwise the configured level is used as a
/// filter directive, so `TOOLBOX_LOG_LEVEL=tool_catalog=debug` works too.
/// Logs go to stderr so they never mix with rendered pages.
fn init_logging(level: &str) {
    let (filter, invalid) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => configured_filter(level),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = invalid {
        warn!("Ignoring invalid log level '{}': {}", level, e);
    }
}

fn configured_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_accepts_directives() {
        assert!(configured_filter("debug").1.is_none());
        assert!(configured_filter("tool_catalog=debug,warn").1.is_none());
    }

    #[test]
    fn test_configured_filter_falls_back_on_garbage() {
        let (_, invalid) = configured_filter("tool_catalog=loudest");
        assert!(invalid.is_some());
    }
}

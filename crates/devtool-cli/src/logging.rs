//! Logging setup for the Devtool CLI
//!
//! Maps the `-v`/`-q` flags to a tracing level and installs a
//! `tracing-subscriber` formatter on stderr. `RUST_LOG` overrides the
//! flag-derived filter.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Logging configuration derived from CLI flags
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Include file and line numbers
    pub source_location: bool,
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let (level, source_location) = match verbosity {
            0 => ("warn", false),
            1 => ("info", false),
            2 => ("debug", true),
            _ => ("trace", true),
        };
        Self {
            level: level.to_string(),
            source_location,
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    // RUST_LOG takes precedence over the flag-derived level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}

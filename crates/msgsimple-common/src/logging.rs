//! Structured logging setup for applications embedding msgsimple

use serde::Deserialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "msgsimple_source=trace")
    pub level: String,
    /// Whether to emit JSON lines instead of human-readable output
    pub json_format: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the environment filter, falling back to `info` when the
    /// configured level does not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json_format {
        registry
            .with(fmt::layer().json().with_target(config.include_targets))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(config.include_targets))
            .try_init()?;
    }

    Ok(())
}

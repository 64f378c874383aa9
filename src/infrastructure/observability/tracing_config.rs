use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    /// Default filter directive, used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        Self {
            environment,
            json_format: logging.json,
            default_filter: logging.filter.clone(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_settings(Environment::Local, &LoggingSettings::default())
    }
}

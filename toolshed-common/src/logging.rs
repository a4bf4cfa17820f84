//! Logging setup for Toolshed binaries and tests.
//!
//! The library crates only emit `tracing` events. Programs that want to see
//! them call [`init_logging`] once at startup:
//!
//! ```no_run
//! use toolshed_common::{init_logging, LogConfig};
//!
//! let config = LogConfig::from_env().with_target(false);
//! init_logging(&config)?;
//! tracing::info!("ready");
//! # Ok::<(), toolshed_common::LoggingError>(())
//! ```

use crate::error::LoggingError;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `toolshed_fs=debug`
pub const LOG_ENV_VAR: &str = "TOOLSHED_LOG";

/// Filter used when nothing else is configured
pub const DEFAULT_FILTER: &str = "warn";

/// Settings for the global tracing subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    filter: String,
    ansi: bool,
    target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            ansi: true,
            target: true,
        }
    }
}

impl LogConfig {
    /// Create a config with the default `warn` filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config whose filter comes from [`LOG_ENV_VAR`], falling back
    /// to the default filter when the variable is unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(LOG_ENV_VAR) {
            Ok(filter) if !filter.trim().is_empty() => Self::new().with_filter(filter),
            _ => Self::new(),
        }
    }

    /// Set the filter directive (`EnvFilter` syntax)
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Enable or disable ANSI colors
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Include or omit the event target (module path)
    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    /// The filter directive
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Build the `EnvFilter` described by this config
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.filter).map_err(|source| LoggingError::InvalidFilter {
            filter: self.filter.clone(),
            source,
        })
    }
}

/// Install a global fmt subscriber writing to stderr.
///
/// Fails if the filter is invalid or a global subscriber already exists.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(config.target)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
        .map_err(LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_builder() {
        let config = LogConfig::new()
            .with_filter("toolshed_fs=debug")
            .with_ansi(false)
            .with_target(false);
        assert_eq!(config.filter(), "toolshed_fs=debug");
        assert!(!config.ansi);
        assert!(!config.target);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(LogConfig::default().filter(), DEFAULT_FILTER);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LogConfig::new().with_filter("toolshed=verbose");
        let err = config.env_filter().unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
        assert!(err.to_string().contains("toolshed=verbose"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        std::env::set_var(LOG_ENV_VAR, "trace");
        let config = LogConfig::from_env();
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(config.filter(), "trace");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_variable() {
        std::env::set_var(LOG_ENV_VAR, "  ");
        let config = LogConfig::from_env();
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(config.filter(), DEFAULT_FILTER);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LogConfig::new().with_ansi(false);
        let _ = init_logging(&config);
        assert!(matches!(
            init_logging(&config),
            Err(LoggingError::AlreadyInitialized(_))
        ));
    }
}

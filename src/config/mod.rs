//! Configuration module for statusboard
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`STATUSBOARD_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use statusboard::config::StatusConfig;
//!
//! let config = StatusConfig::default();
//! assert_eq!(config.server.port, 8081);
//!
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: StatusConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod error;
pub mod logging;
pub mod server;
pub mod sources;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sources::{ContainerConfig, DashboardConfig, OllamaConfig, TelemetryConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the status page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StatusConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Container status query
    pub container: ContainerConfig,
    /// Ollama API endpoint
    pub ollama: OllamaConfig,
    /// GPU / memory / disk commands
    pub telemetry: TelemetryConfig,
    /// Page title and refresh interval
    pub dashboard: DashboardConfig,
}

impl StatusConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Invalid values are silently ignored (the previous value is kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("STATUSBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("STATUSBOARD_HOST") {
            self.server.host = host;
        }

        if let Ok(level) = std::env::var("STATUSBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("STATUSBOARD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        if let Ok(url) = std::env::var("STATUSBOARD_OLLAMA_URL") {
            self.ollama.url = url;
        }
        if let Ok(filter) = std::env::var("STATUSBOARD_CONTAINER") {
            self.container.name_filter = filter;
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "port must be non-zero"));
        }
        if self.ollama.url.is_empty() {
            return Err(ConfigError::invalid("ollama.url", "URL cannot be empty"));
        }
        if self.container.name_filter.is_empty() {
            return Err(ConfigError::invalid(
                "container.name_filter",
                "filter cannot be empty",
            ));
        }

        for (field, secs) in [
            ("container.timeout_seconds", self.container.timeout_seconds),
            ("ollama.timeout_seconds", self.ollama.timeout_seconds),
            ("telemetry.timeout_seconds", self.telemetry.timeout_seconds),
        ] {
            if secs == 0 {
                return Err(ConfigError::invalid(field, "timeout must be non-zero"));
            }
        }

        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::invalid(
                "dashboard.refresh_seconds",
                "refresh interval must be non-zero",
            ));
        }

        Ok(())
    }
}

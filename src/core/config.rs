//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use super::error::{Error, Result};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Base directory served by the `files://{name}` template.
    /// The template is not registered when this is unset.
    pub base_path: Option<PathBuf>,

    /// Log a warning when a resource URI is registered twice.
    /// Duplicates are ignored either way.
    pub warn_on_duplicate_resources: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "resource-registry".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            warn_on_duplicate_resources: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_path) = std::env::var("MCP_RESOURCES_BASE_PATH") {
            config.resources.base_path = Some(PathBuf::from(base_path));
            info!("Resource base path: {:?}", config.resources.base_path);
        }

        if let Ok(warn_duplicates) = std::env::var("MCP_WARN_ON_DUPLICATE_RESOURCES") {
            match warn_duplicates.to_lowercase().as_str() {
                "false" | "0" | "no" | "off" => config.resources.warn_on_duplicate_resources = false,
                "true" | "1" | "yes" | "on" => config.resources.warn_on_duplicate_resources = true,
                other => warn!(
                    "Ignoring invalid MCP_WARN_ON_DUPLICATE_RESOURCES value: {}",
                    other
                ),
            }
        }

        config
    }

    /// Check settings that can only be verified against the environment.
    pub fn validate(&self) -> Result<()> {
        if let Some(base_path) = &self.resources.base_path {
            if !base_path.is_dir() {
                return Err(Error::config(format!(
                    "resource base path is not a directory: {}",
                    base_path.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "resource-registry");
        assert!(config.resources.warn_on_duplicate_resources);
        assert!(config.resources.base_path.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_warn_on_duplicates_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WARN_ON_DUPLICATE_RESOURCES", "false");
        }
        let config = Config::from_env();
        assert!(!config.resources.warn_on_duplicate_resources);

        unsafe {
            std::env::set_var("MCP_WARN_ON_DUPLICATE_RESOURCES", "not-a-bool");
        }
        let config = Config::from_env();
        assert!(config.resources.warn_on_duplicate_resources);

        unsafe {
            std::env::remove_var("MCP_WARN_ON_DUPLICATE_RESOURCES");
        }
    }

    #[test]
    fn test_base_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_RESOURCES_BASE_PATH", "/srv/resources");
        }
        let config = Config::from_env();
        assert_eq!(
            config.resources.base_path,
            Some(PathBuf::from("/srv/resources"))
        );
        unsafe {
            std::env::remove_var("MCP_RESOURCES_BASE_PATH");
        }
    }

    #[test]
    fn test_validate_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.resources.base_path = Some(dir.path().to_path_buf());
        assert!(config.validate().is_ok());

        config.resources.base_path = Some(dir.path().join("missing"));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}

use crate::{ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for CAMPUS_CONFIG_DIR env var, else use ./.campus/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CAMPUS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load from a specific config directory (tests, --config-dir flag).
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CAMPUS_CONFIG_DIR env var > ./.campus/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("CAMPUS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".campus"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CAMPUS_SERVER_URL")
            && !url.is_empty()
        {
            self.server.base_url = url;
        }
        if let Ok(level) = std::env::var("CAMPUS_LOG_LEVEL")
            && let Ok(level) = crate::LogLevel::from_str(&level)
        {
            self.logging.level = level;
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs the stored credential).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (timeout {}s)",
            self.server.base_url, self.server.timeout_secs
        );
        info!("  logging: level={:?}", *self.logging.level);
    }
}

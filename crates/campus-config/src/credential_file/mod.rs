mod credential_file_info;

pub use credential_file_info::CredentialFileInfo;

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::PathBuf;

const CREDENTIAL_FILENAME: &str = "credentials.json";

/// Single-slot durable storage for the bearer credential.
///
/// This is the only component that touches the filesystem for auth
/// purposes. The slot holds at most one token; reading a missing slot
/// yields `Ok(None)` and clearing an empty slot is a no-op. Presence of
/// a stored token says nothing about its validity - the session layer
/// verifies it against the backend before trusting it.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    config_dir: PathBuf,
}

impl CredentialStore {
    /// Store rooted at the discovered config directory
    /// (CAMPUS_CONFIG_DIR env var > ./.campus/).
    pub fn open() -> ConfigErrorResult<Self> {
        Ok(Self {
            config_dir: Config::config_dir()?,
        })
    }

    /// Store rooted at a specific directory (tests, --config-dir flag).
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Path of the credential slot, for diagnostics.
    pub fn path(&self) -> PathBuf {
        self.config_dir.join(CREDENTIAL_FILENAME)
    }

    /// Overwrite the slot with a fresh credential.
    ///
    /// Creates the config directory if it doesn't exist (safe to call
    /// before `Config::load()`).
    pub fn save(&self, token: &str) -> ConfigErrorResult<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir).map_err(|e| ConfigError::Io {
                path: self.config_dir.clone(),
                source: e,
            })?;
        }

        let info = CredentialFileInfo::new(token);
        let content = serde_json::to_string_pretty(&info).map_err(|e| {
            ConfigError::credential(format!("Failed to serialize credential file: {e}"))
        })?;

        let path = self.path();
        std::fs::write(&path, content).map_err(|e| ConfigError::Io { path, source: e })?;

        Ok(())
    }

    /// Read the stored token.
    ///
    /// Returns `Ok(None)` if nothing is stored. Returns `Err` if the
    /// file exists but cannot be read or parsed - callers treat that as
    /// "not logged in" and clear the slot.
    pub fn load(&self) -> ConfigErrorResult<Option<String>> {
        Ok(self.read()?.map(|info| info.token))
    }

    /// Read the full slot record, including diagnostics fields.
    pub fn read(&self) -> ConfigErrorResult<Option<CredentialFileInfo>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let info: CredentialFileInfo = serde_json::from_str(&content).map_err(|e| {
            ConfigError::credential(format!("Invalid credential file {}: {e}", path.display()))
        })?;

        Ok(Some(info))
    }

    /// Delete the stored credential.
    /// Silently succeeds if the slot is already empty.
    pub fn clear(&self) -> ConfigErrorResult<()> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io { path, source: e })?;
        }
        Ok(())
    }
}

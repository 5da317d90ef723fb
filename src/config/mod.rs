//! Configuration module for assaydeck
//!
//! Manages application configuration such as the WebDAV base URL override.
//! Configuration is stored in the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// WebDAV base URL to use when the host context does not carry one
    #[serde(default)]
    pub webdav_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("assaydeck").join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;
        settings.try_deserialize()
    }

    /// Write the configuration to a specific file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config dir: {e}")))?;
        }
        fs::write(path, toml)
            .map_err(|e| ConfigError::Message(format!("Failed to write config: {e}")))
    }

    /// Apply the configured WebDAV fallback to a context missing one
    #[must_use]
    pub fn apply_webdav_fallback(
        &self,
        mut context: crate::context::ExecutionContext,
    ) -> crate::context::ExecutionContext {
        if context.irods_webdav_url.is_none()
            && let Some(url) = &self.webdav_url
        {
            context.irods_webdav_url = Some(url.clone());
            context.irods_webdav_enabled = true;
        }
        context
    }
}

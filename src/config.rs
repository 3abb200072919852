//! Application configuration
//!
//! TOML-backed settings for the shell and logging, stored under the user's
//! config directory. Missing files fall back to defaults; malformed files
//! surface a configuration error instead of being silently replaced.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration metadata
    pub metadata: ConfigMetadata,

    /// Interactive shell settings
    pub shell: ShellSettings,

    /// Logging settings
    pub log: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Interactive shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Prompt attempts before a job is abandoned
    pub max_attempts: u32,

    /// Clear the console before showing the menu
    pub clear_screen: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            clear_screen: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();

        AppConfig {
            metadata: ConfigMetadata {
                version: "1.0".to_string(),
                created_at: now,
                updated_at: now,
            },
            shell: ShellSettings::default(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration file location.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pacer")
            .join("config.toml")
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Load from the default path; a missing file means defaults, a present
    /// but unreadable file is reported before falling back.
    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!(
                    "Ignoring invalid config file {}: {:#}",
                    config_path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }
}

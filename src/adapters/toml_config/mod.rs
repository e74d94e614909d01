// TOML config adapter - Configuration files in TOML

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config_initialization::AppConfig;
use crate::error::{SplitError, SplitResult};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "splitter.toml";

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Default per-user config file path, e.g. `~/.config/clip-splitter/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("clip-splitter").join("config.toml"))
    }

    /// Load configuration from file
    pub fn load(&self, path: &Path) -> SplitResult<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| SplitError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        let config = self.parse(&content).map_err(|e| SplitError::Config {
            message: format!("{} ({})", e, path.display()),
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string; missing keys take defaults
    pub fn parse(&self, content: &str) -> SplitResult<AppConfig> {
        toml::from_str(content).map_err(|e| SplitError::Config {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }

    /// Serialize config to TOML string
    pub fn render(&self, config: &AppConfig) -> SplitResult<String> {
        toml::to_string_pretty(config).map_err(|e| SplitError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }
}

impl Default for TomlConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

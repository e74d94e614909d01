//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI > Env > File > Defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::toml_config::{TomlConfigAdapter, LOCAL_CONFIG_FILE};
use crate::domain::model::{EncodingProfile, TailPolicy};
use crate::error::{SplitError, SplitResult};
use crate::utils::logging::LoggingConfig;

/// Which adapter opens sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeBackend {
    Libav,
    Ffprobe,
}

impl Default for ProbeBackend {
    fn default() -> Self {
        if cfg!(feature = "libav") {
            ProbeBackend::Libav
        } else {
            ProbeBackend::Ffprobe
        }
    }
}

impl std::str::FromStr for ProbeBackend {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "libav" => Ok(ProbeBackend::Libav),
            "ffprobe" => Ok(ProbeBackend::Ffprobe),
            other => Err(SplitError::Config {
                message: format!("Invalid probe backend: {}. Valid values: libav, ffprobe", other),
            }),
        }
    }
}

/// External tool locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
    pub probe_backend: ProbeBackend,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            probe_backend: ProbeBackend::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    pub zero_length_tail: TailPolicy,
}

/// Effective application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub encoding: EncodingProfile,
    pub tools: ToolsConfig,
    pub partition: PartitionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> SplitResult<()> {
        self.encoding.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub video_codec: Option<String>,
    pub preset: Option<String>,
    pub crf: Option<u8>,
    pub zero_length_tail: Option<TailPolicy>,
}

/// Build the effective configuration
pub fn initialize_configuration_hierarchy(overrides: &ConfigOverrides) -> SplitResult<AppConfig> {
    // Step 1: defaults, replaced wholesale by a file when one is found
    let mut config = match locate_config_file(overrides.config_path.as_deref())? {
        Some(path) => TomlConfigAdapter::new().load(&path)?,
        None => {
            debug!("No configuration file found, using defaults");
            AppConfig::default()
        }
    };

    // Step 2: environment
    let env_count = apply_environment_overrides(&mut config, |key| std::env::var(key).ok())?;
    if env_count > 0 {
        info!("Applied {} environment variable overrides", env_count);
    }

    // Step 3: command line
    apply_cli_overrides(&mut config, overrides);

    config.validate()?;
    Ok(config)
}

/// Explicit path first, then `./splitter.toml`, then the user config file.
/// An explicit path that does not exist is an error.
fn locate_config_file(explicit: Option<&Path>) -> SplitResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SplitError::Config {
                message: format!("Config file not found: {}", path.display()),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(TomlConfigAdapter::user_config_path().filter(|p| p.is_file()))
}

/// Apply `SPLITTER_*` variables; returns how many were applied
pub fn apply_environment_overrides<F>(config: &mut AppConfig, lookup: F) -> SplitResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = 0;

    if let Some(value) = lookup("SPLITTER_LOG_LEVEL") {
        config.logging.level = value;
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_FFMPEG") {
        config.tools.ffmpeg = PathBuf::from(value);
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_FFPROBE") {
        config.tools.ffprobe = PathBuf::from(value);
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_PROBE_BACKEND") {
        config.tools.probe_backend = value.parse()?;
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_VIDEO_CODEC") {
        config.encoding.video_codec = value;
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_PRESET") {
        config.encoding.preset = value;
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_CRF") {
        config.encoding.crf = value.trim().parse().map_err(|_| SplitError::Config {
            message: format!("SPLITTER_CRF must be a number between 0 and 51, got '{}'", value),
        })?;
        applied += 1;
    }
    if let Some(value) = lookup("SPLITTER_ZERO_LENGTH_TAIL") {
        config.partition.zero_length_tail = value.parse()?;
        applied += 1;
    }

    Ok(applied)
}

/// Apply command-line overrides
pub fn apply_cli_overrides(config: &mut AppConfig, overrides: &ConfigOverrides) {
    if let Some(level) = &overrides.log_level {
        config.logging.level = level.clone();
    }
    if overrides.log_json {
        config.logging.json = true;
    }
    if let Some(codec) = &overrides.video_codec {
        config.encoding.video_codec = codec.clone();
    }
    if let Some(preset) = &overrides.preset {
        config.encoding.preset = preset.clone();
    }
    if let Some(crf) = overrides.crf {
        config.encoding.crf = crf;
    }
    if let Some(policy) = overrides.zero_length_tail {
        config.partition.zero_length_tail = policy;
    }
}

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON5 catalog definition to serve. Unset means the embedded
    /// Tourney Master catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Per-block entrance stagger handed to the render projector.
    #[serde(default = "default_stagger_ms")]
    pub entrance_stagger_ms: u32,
    #[serde(default = "default_duration_ms")]
    pub entrance_duration_ms: u32,
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_stagger_ms() -> u32 {
    100
}

fn default_duration_ms() -> u32 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            entrance_stagger_ms: default_stagger_ms(),
            entrance_duration_ms: default_duration_ms(),
            config_path: stable_app_data_dir().join(CONFIG_FILE_NAME),
        }
    }
}

/// Base directory for config and logs. `TOURNEYCAT_DATA_DIR` overrides it
/// so tests and portable installs can relocate everything.
pub fn stable_app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("TOURNEYCAT_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    std::env::temp_dir().join("tourneycat")
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.entrance_stagger_ms > 1_000 {
        return Err("entrance_stagger_ms out of range (0-1000)".into());
    }

    if cfg.entrance_duration_ms > 5_000 {
        return Err("entrance_duration_ms out of range (0-5000)".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    if let Some(path) = &cfg.catalog_path {
        if path.as_os_str().is_empty() {
            return Err("catalog_path must not be empty when set".into());
        }
    }

    Ok(())
}

/// Read the config file at `path` (or the stable default location). A
/// missing file yields defaults; a present but malformed file is an error.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => stable_app_data_dir().join(CONFIG_FILE_NAME),
    };

    let mut config = if config_path.exists() {
        let text = std::fs::read_to_string(&config_path)?;
        toml::from_str::<Config>(&text).map_err(|error| ConfigError::Parse(error.to_string()))?
    } else {
        Config::default()
    };
    config.config_path = config_path;

    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    validate(config).map_err(ConfigError::Invalid)?;

    if let Some(parent) = config.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let text =
        toml::to_string_pretty(config).map_err(|error| ConfigError::Parse(error.to_string()))?;
    std::fs::write(&config.config_path, text)?;
    Ok(())
}

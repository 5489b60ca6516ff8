//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <file>`, else `~/.config/cdsfetch/config.toml`
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILENAME, DEFAULT_PADDING, ENV_FOLDER, ENV_PADDING, SHARED_FOLDER,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub download: DownloadConfig,
    pub countries: CountriesConfig,
}

/// Where and how files are downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Fixed download root. When unset, the shared folder or
    /// `~/copernicus_data` is used.
    pub folder: Option<PathBuf>,
    /// Bounding-box padding in degrees.
    pub padding: f64,
    /// Folder preferred over `~/copernicus_data` when it exists.
    pub shared_folder: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            folder: None,
            padding: DEFAULT_PADDING,
            shared_folder: PathBuf::from(SHARED_FOLDER),
        }
    }
}

/// Country table settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountriesConfig {
    /// Extra `[[country]]` entries extending the built-in table.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` must exist when given; the global file is optional.
    pub fn load(explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                if let Some(global_path) = Self::global_config_path() {
                    if global_path.exists() {
                        config.merge(Self::load_file(&global_path)?);
                    }
                }
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    fn merge(&mut self, other: Config) {
        let default_download = DownloadConfig::default();
        if other.download.folder.is_some() {
            self.download.folder = other.download.folder;
        }
        if other.download.padding != default_download.padding {
            self.download.padding = other.download.padding;
        }
        if other.download.shared_folder != default_download.shared_folder {
            self.download.shared_folder = other.download.shared_folder;
        }

        if other.countries.file.is_some() {
            self.countries.file = other.countries.file;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(ENV_FOLDER) {
            self.download.folder = Some(PathBuf::from(val));
        }
        if let Some(val) = env.non_empty(ENV_PADDING) {
            match val.parse::<f64>() {
                Ok(p) if p.is_finite() && p >= 0.0 => self.download.padding = p,
                _ => tracing::warn!("ignoring invalid {ENV_PADDING} value: {val}"),
            }
        }
    }
}

//! Configuration model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collector configuration.
    pub collector: CollectorConfig,
    /// Log configuration.
    pub log: LogConfig,
}

/// Collector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Roots holding one folder per show.
    pub shows_dirs: Vec<PathBuf>,
    /// Folder names never treated as shows.
    pub skip_folders: Vec<String>,
    /// Extensions recognized as video (lowercase, no dot).
    pub video_suffixes: Vec<String>,
    /// Suffixes download clients append to unfinished files.
    pub tmp_suffixes: Vec<String>,
}

/// Log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when RUST_LOG is not set.
    pub level: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            shows_dirs: Vec::new(),
            skip_folders: vec!["@eaDir".to_string(), "lost+found".to_string()],
            video_suffixes: [
                "mkv", "mp4", "avi", "mov", "wmv", "m4v", "ts", "m2ts", "flv", "webm", "mpg",
                "mpeg", "vob", "rmvb", "rm", "iso",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tmp_suffixes: [".part", ".!qB", ".!qb", ".!ut", ".!bt", ".crdownload"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.collector.video_suffixes.is_empty() {
            return Err(Error::Config(
                "collector.video_suffixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kodi_collector")
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one the default location
/// is tried, and a missing default file gives the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            Config::from_toml(&content)
        }
        None => {
            let config_path = default_config_path();
            if !config_path.exists() {
                return Ok(Config::default());
            }
            let content = std::fs::read_to_string(&config_path)?;
            Config::from_toml(&content)
        }
    }
}

//! Configuration handling for the todo shell
//!
//! Configuration is read from `--config <PATH>` or, when that flag is
//! absent, from `config.toml` in the platform config directory
//! (e.g. `~/.config/todo-shell/config.toml`). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::export::ExportOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {}", .0.display())]
    Missing(PathBuf),
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory relative export file names are resolved against
    pub directory: Option<PathBuf>,

    /// Pretty-print JSON exports
    pub pretty_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            pretty_json: true,
        }
    }
}

impl ExportConfig {
    /// Converts to the options the store uses
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            directory: self.directory.clone(),
            pretty_json: self.pretty_json,
        }
    }
}

/// Interactive shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Print the welcome banner on start
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { banner: true }
    }
}

/// User configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub shell: ShellConfig,
}

impl Config {
    /// Loads configuration from an explicit path or the default location
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::Missing(path.to_path_buf()).into());
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "todo-shell", "todo-shell")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

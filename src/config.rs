//!
//! Configuration file of notesystem.
//!
//! The file is TOML with one table per mode. Values given on the command line take
//! precedence; see `main.rs` for the merge.

use crate::rules::RuleRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

/// File name inside the user config directory (`~/.config` on unix)
pub const USER_CONFIG_FILE: &str = "notesystem.toml";

/// Project config, relative to the working directory
pub const LOCAL_CONFIG_FILE: &str = ".notesystem.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// The configuration file is not valid TOML or has wrongly typed values
    #[error("Failed to parse config file at {path}: {source}")]
    Parse { source: toml::de::Error, path: String },
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    pub verbose: bool,
    pub no_visual: bool,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    pub fix: bool,
    pub simple_errors: bool,
    /// Rule names, e.g. `math-error`
    pub disabled_errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertConfig {
    pub pandoc_args: Option<String>,
    pub pandoc_template: Option<String>,
    pub to_pdf: bool,
    pub ignore_warnings: bool,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub case_insensitive: bool,
    pub full_path: bool,
}

/// Represents the complete configuration loaded from notesystem.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub check: CheckConfig,
    pub convert: ConvertConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            source,
            path: path.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path_str.clone(),
        })?;
        Self::from_toml(&content, &path_str)
    }

    /// Load the explicit config file, or the first default location that exists.
    ///
    /// Without any config file the defaults are used.
    pub fn load(explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::info!("Loading config from {path}");
            return Self::from_file(Path::new(path));
        }

        for path in default_config_paths() {
            if path.is_file() {
                log::info!("Loading config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Disabled rule names from the file that exist in `registry`.
    ///
    /// Unknown names are reported and dropped.
    pub fn known_disabled_errors(&self, registry: &RuleRegistry) -> HashSet<String> {
        self.check
            .disabled_errors
            .iter()
            .filter(|name| {
                let known = registry.contains(name);
                if !known {
                    log::warn!("Unknown error '{name}' in disabled_errors, ignoring it");
                }
                known
            })
            .cloned()
            .collect()
    }
}

/// User config file from the platform config directory
pub fn user_config_path() -> Option<PathBuf> {
    use etcetera::{BaseStrategy, choose_base_strategy};

    match choose_base_strategy() {
        Ok(strategy) => Some(strategy.config_dir().join(USER_CONFIG_FILE)),
        Err(e) => {
            log::debug!("Failed to determine user config directory: {e}");
            None
        }
    }
}

/// Looked up in order when no `--config-file` is given; the first existing file is used
pub fn default_config_paths() -> Vec<PathBuf> {
    user_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)))
        .collect()
}

//! Validator configuration loaded from ~/.djcode/config.yaml.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dsl::Validator;

/// Settings shared by every validation run of the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reject repeated pattern numbers instead of letting the last one win.
    #[serde(default)]
    pub strict_duplicates: bool,
    /// Token file read when none is given on the command line.
    #[serde(default = "Config::default_input")]
    pub default_input: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Yaml(PathBuf, serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            ConfigError::Yaml(path, e) => write!(f, "invalid config {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    fn path_in(home: &Path) -> PathBuf {
        home.join(".djcode").join("config.yaml")
    }

    /// Load config from the standard path (~/.djcode/config.yaml).
    /// Returns None if the file is missing or unreadable.
    pub fn load() -> Option<Self> {
        Self::load_in(&dirs::home_dir()?)
    }

    /// Load `.djcode/config.yaml` under `home`, same fallback rules as [`Config::load`].
    pub fn load_in(home: &Path) -> Option<Self> {
        let path = Self::path_in(home);
        let content = std::fs::read_to_string(&path).ok()?;
        match serde_yaml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                None
            }
        }
    }

    /// Load config from an explicit path, reporting any failure.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Yaml(path.to_path_buf(), e))
    }

    pub fn validator(&self) -> Validator {
        Validator {
            strict_duplicates: self.strict_duplicates,
        }
    }

    fn default_input() -> PathBuf {
        PathBuf::from("tokens.txt")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_duplicates: false,
            default_input: Self::default_input(),
        }
    }
}

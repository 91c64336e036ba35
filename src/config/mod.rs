//! Configuration file (kickstart.yaml)
//!
//! The file is optional. It can name the `brew` binary and list the packages
//! and casks to install on every run:
//!
//! ```yaml
//! brew: /opt/homebrew/bin/brew
//! packages: [git, ripgrep]
//! casks: [firefox]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config};

/// File name looked up in the user's config directory
pub const CONFIG_FILE: &str = "kickstart.yaml";

/// Contents of kickstart.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the brew binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brew: Option<PathBuf>,

    /// Command-line packages
    #[serde(default)]
    pub packages: Vec<String>,

    /// GUI applications
    #[serde(default)]
    pub casks: Vec<String>,
}

impl Config {
    /// Parse configuration from YAML string
    fn parse(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes as YAML null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(config::not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::parse(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load the explicit file if given, else the default file if present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading default configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Brew binary: the override if given, else the file's, else `brew`
    pub fn brew_program(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.brew.clone())
            .unwrap_or_else(|| PathBuf::from("brew"))
    }
}

/// `<config dir>/kickstart/kickstart.yaml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kickstart").join(CONFIG_FILE))
}

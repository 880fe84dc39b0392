//! Template configuration
//!
//! The six section anchors can be overridden without code changes.
//! Config is read from `--config <path>`, else `~/.config/bugform/config.toml`
//! (XDG standard) if present, else the built-in template is used.
//!
//! ```toml
//! [template]
//! anchors = [
//!     "#### 1. Root Cause Analysis (RCA) (optional)",
//!     "#### 2. Symptom (optional)",
//!     "#### 3. All Trigger Conditions (optional)",
//!     "#### 4. Workaround (optional)",
//!     "#### 5. Affected versions",
//!     "#### 6. Fixed versions",
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{AnchorError, DEFAULT_ANCHORS, SectionAnchors};

/// Config directory name under the user config dir
const CONFIG_DIR: &str = "bugform";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// The anchor list is malformed
    #[error("invalid template anchors: {0}")]
    Anchors(#[from] AnchorError),
}

/// Top-level bugform configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bug template settings
    #[serde(default)]
    pub template: TemplateConfig,
}

/// Bug template settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Section anchors, in section order
    #[serde(default = "default_anchors")]
    pub anchors: Vec<String>,
}

fn default_anchors() -> Vec<String> {
    DEFAULT_ANCHORS.iter().map(ToString::to_string).collect()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            anchors: default_anchors(),
        }
    }
}

impl Config {
    /// Get the user-level config file path
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.anchors()?;
        Ok(config)
    }

    /// Load and validate config from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml(&content, path)
    }

    /// Load config from an explicit path, else the user config if it exists,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validated anchors
    pub fn anchors(&self) -> Result<SectionAnchors, ConfigError> {
        Ok(SectionAnchors::new(self.template.anchors.clone())?)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

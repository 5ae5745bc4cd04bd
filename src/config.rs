//! User configuration (stagehand.yaml)
//!
//! ```yaml
//! assets_dir: /opt/stagehand/assets
//! backend: future
//! jobs: 4
//! ```
//!
//! Every field is optional. Lookups of the process environment are done by
//! the caller and passed in, so resolution stays a pure function of its
//! arguments.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::AssetStore;
use crate::error::{Result, StagehandError};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "STAGEHAND_CONFIG";

/// Environment variable overriding the asset store root
pub const ASSETS_DIR_ENV: &str = "STAGEHAND_ASSETS_DIR";

/// Default configuration file name under the user config directory
const CONFIG_FILE: &str = "stagehand.yaml";

/// Directory under the user config directory
const CONFIG_DIR: &str = "stagehand";

/// Parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the asset store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// Preferred backend when `select` is given none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,

    /// Worker count used by `select` when not given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load configuration from a file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StagehandError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| StagehandError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load configuration following the lookup order
    ///
    /// An explicit path (flag or `STAGEHAND_CONFIG`) must exist. The default
    /// location under the user config directory is optional.
    pub fn load(explicit: Option<&Path>, env_path: Option<OsString>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = env_path.filter(|p| !p.is_empty()) {
            return Self::from_file(Path::new(&path));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Asset directory override: environment first, then config
    ///
    /// `None` means the assets compiled into the binary are used.
    pub fn assets_dir(&self, env_override: Option<OsString>) -> Option<PathBuf> {
        env_override
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.assets_dir.clone())
    }

    /// Asset store over the override directory, or the packaged assets
    pub fn asset_store(&self, env_override: Option<OsString>) -> AssetStore {
        self.assets_dir(env_override)
            .map_or_else(AssetStore::packaged, AssetStore::new)
    }
}

/// `<user config dir>/stagehand/stagehand.yaml`, if a config dir exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

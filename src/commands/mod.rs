//! Command implementations for Stagehand CLI

use std::path::{Path, PathBuf};

use stagehand::assets::AssetStore;
use stagehand::config::{ASSETS_DIR_ENV, CONFIG_ENV, Config};
use stagehand::error::{Result, StagehandError};

pub mod backends;
pub mod bundles;
pub mod completions;
pub mod example;
pub mod select;
pub mod shell;
pub mod template;
pub mod version;

/// Configuration and asset store shared by the commands
pub struct Context {
    pub config: Config,
    pub store: AssetStore,
}

impl Context {
    /// Load configuration from the flag or environment and open the asset store
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path, std::env::var_os(CONFIG_ENV))?;
        let store = config.asset_store(std::env::var_os(ASSETS_DIR_ENV));
        Ok(Self { config, store })
    }
}

/// Destination directory from CLI argument or current directory
fn destination_dir(to: Option<PathBuf>) -> Result<PathBuf> {
    match to {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| StagehandError::io(Path::new("."), e)),
    }
}

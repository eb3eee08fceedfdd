//! Configuration management for Prewarm

pub mod schema;

pub use schema::Config;

use crate::error::{PrewarmError, PrewarmResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_NAME: &str = "prewarm.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Create a new config manager with the default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            explicit: false,
        }
    }

    /// Create a config manager with an explicitly chosen path.
    ///
    /// An explicit path must exist; loading fails otherwise, unlike the
    /// default path which silently falls back to defaults.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            explicit: true,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prewarm")
            .join("config.toml")
    }

    /// Walk upward from `start` looking for a project-local prewarm.toml
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(LOCAL_CONFIG_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }

    /// Load configuration.
    ///
    /// Precedence: an explicit `--config` path wins, then the
    /// project-local config, then the user config, then defaults.
    pub async fn load(&self, local: Option<&Path>) -> PrewarmResult<Config> {
        if self.explicit {
            if !self.config_path.exists() {
                return Err(PrewarmError::ConfigNotFound(self.config_path.clone()));
            }
            return self.load_from_file(&self.config_path).await;
        }

        if let Some(local) = local {
            return self.load_from_file(local).await;
        }

        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> PrewarmResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PrewarmError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| PrewarmError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

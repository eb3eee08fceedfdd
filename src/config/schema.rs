//! Configuration schema for Prewarm
//!
//! Configuration is stored at `~/.config/prewarm/config.toml`, with an
//! optional project-local `prewarm.toml` taking precedence. Relative
//! paths are resolved against the application root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Application layout
    pub app: AppConfig,

    /// Cache directories
    pub cache: CacheConfig,

    /// Warmup pass behavior
    pub warmup: WarmupConfig,
}

impl Config {
    /// The application root all relative paths resolve against
    pub fn root(&self) -> PathBuf {
        self.app
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a configured path against the application root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root().join(path)
        }
    }

    /// The environment-specific cache directory
    pub fn cache_dir(&self) -> PathBuf {
        self.resolve(&self.cache.dir).join(&self.general.environment)
    }

    /// The build directory, falling back to the cache directory.
    ///
    /// The two differ in split deployments where artifacts are built
    /// separately from the runtime cache location.
    pub fn build_dir(&self) -> PathBuf {
        match self.cache.build_dir {
            Some(ref dir) => self.resolve(dir).join(&self.general.environment),
            None => self.cache_dir(),
        }
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Environment name the cache is warmed for
    pub environment: String,

    /// Debug mode flag recorded in log output
    pub debug: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            environment: "prod".to_string(),
            debug: false,
        }
    }
}

/// Application layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application name, used for the preload manifest filename
    pub name: String,

    /// Application root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Directory holding TOML configuration fragments
    pub config_dir: PathBuf,

    /// Route definitions file
    pub routes_file: PathBuf,

    /// Service definitions file
    pub services_file: PathBuf,

    /// Templates directory
    pub templates_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            root: None,
            config_dir: PathBuf::from("config"),
            routes_file: PathBuf::from("config/routes.toml"),
            services_file: PathBuf::from("config/services.toml"),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

/// Cache directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory root (environment name is appended)
    pub dir: PathBuf,

    /// Separate build directory for split deployments
    pub build_dir: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("var/cache"),
            build_dir: None,
        }
    }
}

/// Warmup pass configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WarmupConfig {
    /// Abort the pass on the first warmer failure.
    ///
    /// When disabled, every warmer in the working set still runs and
    /// the pass fails at the end naming all failed warmers.
    pub fail_fast: bool,
}

impl Default for WarmupConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

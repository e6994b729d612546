//! Configuration management for wasm-ports

pub mod schema;

pub use schema::Config;

use crate::error::{PortError, PortResult};
use crate::port::StaticLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// Locates and reads the wasm-ports TOML config
///
/// A missing file is not an error: every setting has a default, and port
/// options default to each port's schema defaults.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the per-user config file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Manager for an explicit file (`--config` / `WASM_PORTS_CONFIG`)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// `<config dir>/wasm-ports/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wasm-ports")
            .join("config.toml")
    }

    /// Root for port sources and the sysroot when not configured
    pub fn cache_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wasm-ports")
    }

    /// Whether the config file is present
    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Read the config file, or defaults when it is absent
    pub fn load(&self) -> PortResult<Config> {
        if !self.exists() {
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Parse `path` as a wasm-ports config
    pub fn load_from_file(&self, path: &Path) -> PortResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| PortError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| PortError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Ports tree layout, falling back to the cache directory
    pub fn layout(config: &Config) -> StaticLayout {
        let cache = Self::cache_dir();
        StaticLayout {
            ports_dir: config
                .build
                .ports_dir
                .clone()
                .unwrap_or_else(|| cache.join("ports")),
            include_dir: config
                .build
                .include_dir
                .clone()
                .unwrap_or_else(|| cache.join("sysroot").join("include")),
        }
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
